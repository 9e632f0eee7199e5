//! Generates `BAO_CAO_THUC_TAP.docx` — the graduation internship report.

use colored::Colorize;
use docforge::{LineOptions, Margins, Metadata, ReportBuilder, StyleSheet};

const OUTPUT: &str = "BAO_CAO_THUC_TAP.docx";
const STUDENT: &str = "Nguyễn Văn Kiệt";
const LOGO: &str = "assets/logo_utc.png";

fn main() -> docforge::Result<()> {
    env_logger::init();
    println!("Đang tạo báo cáo thực tập...");

    let styles = StyleSheet::utc();
    let mut r = ReportBuilder::new(styles.clone());
    r.metadata(Metadata::titled("Báo cáo thực tập tốt nghiệp", STUDENT))
        .set_margins(Margins::new(2.5, 2.5, 3.0, 2.0))
        .page_number_header();

    cover_page(&mut r);
    secondary_cover_page(&mut r);
    acknowledgment(&mut r);
    front_matter(&mut r);
    chapter1(&mut r);
    chapter2(&mut r);
    chapter3(&mut r);
    chapter4(&mut r);
    references(&mut r);
    appendix(&mut r);

    docforge::save(&r.finish(), &styles, OUTPUT)?;

    println!("{} {OUTPUT}", "Đã tạo file:".green().bold());
    println!("Cấu trúc báo cáo:");
    println!("  1. Bìa chính (khung viền, bảng thông tin SV, logo UTC)");
    println!("  2. Bìa phụ");
    println!("  3. Lời cảm ơn");
    println!("  4. Mục lục + Danh mục bảng biểu");
    println!("  5. Danh mục từ viết tắt");
    println!("  6. 4 chương nội dung chính");
    println!("  7. Tài liệu tham khảo (IEEE)");
    println!("  8. Phụ lục");
    Ok(())
}

fn cover_page(r: &mut ReportBuilder) {
    r.begin_section(true);
    school_banner(r);
    r.logo(LOGO, 3.5);
    r.styled_line(
        "BÁO CÁO",
        LineOptions::default()
            .with_size(14.0)
            .with_bold(true)
            .with_underline(true)
            .with_spacing(12.0, 0.0),
    );
    r.styled_line(
        "THỰC TẬP TỐT NGHIỆP",
        LineOptions::default().with_size(22.0).with_bold(true).with_spacing(12.0, 0.0),
    );
    r.styled_line(
        "CỬ NHÂN",
        LineOptions::default().with_size(22.0).with_bold(true).with_spacing(0.0, 24.0),
    );
    r.info_table(
        &[
            ("Sinh viên thực hiện", STUDENT),
            ("Mã sinh viên", "221230890"),
            ("Lớp", "CNTT1-K63"),
            ("Khóa", "63"),
            ("Ngành đào tạo", "Công nghệ thông tin"),
            ("Đơn vị thực tập", "SY PARTNERS., JSC"),
            ("Giảng viên hướng dẫn", "ThS. Nguyễn Đức Dư"),
            ("CBHD tại đơn vị TT", "Ông Trần Minh Hoàng"),
            ("Thời gian thực tập", "Từ ngày 26/06/2025 đến ngày 26/09/2025"),
        ],
        (5.0, 9.0),
    );
    r.empty_line().empty_line().empty_line();
    r.styled_line(
        "Hà Nội – 2026",
        LineOptions::default().with_size(14.0).with_bold(true).with_italic(true),
    );
}

fn secondary_cover_page(r: &mut ReportBuilder) {
    r.begin_section(true);
    school_banner(r);
    r.logo(LOGO, 3.5);
    r.styled_line(
        "BÁO CÁO",
        LineOptions::default()
            .with_size(14.0)
            .with_bold(true)
            .with_underline(true)
            .with_spacing(12.0, 0.0),
    );
    r.styled_line(
        "THỰC TẬP TỐT NGHIỆP",
        LineOptions::default().with_size(22.0).with_bold(true).with_spacing(12.0, 24.0),
    );
    r.labeled_value_lines(&[
        ("Sinh viên thực hiện", STUDENT),
        ("Giảng viên hướng dẫn", "ThS. Nguyễn Đức Dư"),
        ("Đơn vị thực tập", "SY PARTNERS., JSC"),
    ]);
    r.empty_line().empty_line().empty_line();
    r.styled_line(
        "Hà Nội – 2026",
        LineOptions::default().with_size(14.0).with_bold(true).with_italic(true),
    );
}

fn school_banner(r: &mut ReportBuilder) {
    r.styled_line(
        "TRƯỜNG ĐẠI HỌC GIAO THÔNG VẬN TẢI",
        LineOptions::default().with_size(14.0),
    );
    r.styled_line(
        "KHOA CÔNG NGHỆ THÔNG TIN",
        LineOptions::default()
            .with_size(14.0)
            .with_bold(true)
            .with_underline(true)
            .with_spacing(0.0, 24.0),
    );
}

fn acknowledgment(r: &mut ReportBuilder) {
    r.begin_section(false);
    r.chapter_title("Lời cảm ơn", false);
    r.body_paragraph(
        "Trước tiên, em xin gửi lời cảm ơn chân thành đến Ban lãnh đạo công ty SY PARTNERS., \
         JSC đã tạo điều kiện cho em được thực tập tại công ty trong ba tháng vừa qua. Môi \
         trường làm việc chuyên nghiệp cùng sự hỗ trợ nhiệt tình của các anh chị trong dự án \
         đã giúp em học hỏi được rất nhiều kiến thức và kỹ năng thực tế.",
    );
    r.body_paragraph(
        "Em xin cảm ơn thầy Nguyễn Đức Dư, giảng viên hướng dẫn, đã tận tình chỉ bảo và góp ý \
         trong suốt quá trình thực tập cũng như hoàn thiện báo cáo này.",
    );
    r.body_paragraph(
        "Do thời gian và kiến thức còn hạn chế, báo cáo không tránh khỏi thiếu sót. Em rất \
         mong nhận được sự góp ý của quý thầy cô để báo cáo được hoàn thiện hơn.",
    );
}

fn front_matter(r: &mut ReportBuilder) {
    r.page_break();
    r.toc_placeholder();
    r.page_break();
    r.list_of_tables();

    r.page_break();
    r.styled_line(
        "DANH MỤC TỪ VIẾT TẮT",
        LineOptions::default().with_size(14.0).with_bold(true).with_spacing(0.0, 12.0),
    );
    r.plain_table(
        &["Từ viết tắt", "Tiếng Anh", "Giải nghĩa"],
        &[
            &["API", "Application Programming Interface", "Giao diện lập trình ứng dụng"],
            &["CSDL", "", "Cơ sở dữ liệu"],
            &["DB", "Database", "Cơ sở dữ liệu"],
            &["REST", "Representational State Transfer", "Kiến trúc dịch vụ web"],
            &["UTC", "University of Transport and Communications", "Trường Đại học Giao thông Vận tải"],
        ],
        Some(&[3.0, 6.0, 6.0]),
    );
}

fn chapter1(r: &mut ReportBuilder) {
    r.chapter_title("Chương 1\nGiới thiệu chung về đơn vị thực tập", true);

    r.section_title("1.1. Thông tin chung về đơn vị thực tập");
    r.body_paragraph(
        "SY PARTNERS., JSC là công ty phát triển phần mềm chuyên cung cấp dịch vụ gia công \
         cho thị trường Nhật Bản, tập trung vào các hệ thống nghiệp vụ doanh nghiệp quy mô \
         lớn. Văn phòng chính đặt tại Hà Nội với hơn 80 kỹ sư phần mềm.",
    );
    r.captioned_table(
        1,
        "Thông tin chung về công ty",
        &["Hạng mục", "Nội dung"],
        &[
            &["Tên công ty", "SY PARTNERS., JSC"],
            &["Địa chỉ", "Cầu Giấy, Hà Nội"],
            &["Lĩnh vực", "Gia công phần mềm thị trường Nhật Bản"],
            &["Quy mô", "Hơn 80 kỹ sư"],
        ],
        Some(&[5.0, 10.0]),
    );

    r.section_title("1.2. Chức năng, nhiệm vụ của bộ phận thực tập");
    r.body_paragraph(
        "Bộ phận thực tập là đội dự án SORA STEP4, phụ trách thiết kế chi tiết cho hệ thống \
         quản lý nghiệp vụ của khách hàng Nhật Bản, bao gồm thiết kế cơ sở dữ liệu, màn hình, \
         API và xử lý batch.",
    );

    r.section_title("1.3. Môi trường làm việc và quy trình công tác");
    r.bullet_list(&[
        "Quy trình phát triển theo mô hình Agile/Scrum",
        "Sprint 2 tuần với daily standup meeting hàng ngày",
        "Review chéo tài liệu thiết kế giữa các thành viên",
        "Trao đổi trực tiếp với khách hàng Nhật qua Backlog và Slack",
    ]);
}

fn chapter2(r: &mut ReportBuilder) {
    r.chapter_title("Chương 2\nNội dung thực tập", true);

    r.section_title("2.1. Mục tiêu và yêu cầu của đợt thực tập");
    r.body_paragraph(
        "Mục tiêu của đợt thực tập là nắm vững quy trình thiết kế chi tiết trong dự án gia \
         công phần mềm thực tế, từ thiết kế cơ sở dữ liệu đến thiết kế API và batch, đồng \
         thời rèn luyện kỹ năng làm việc nhóm trong môi trường chuyên nghiệp.",
    );

    r.section_title("2.2. Kế hoạch thực tập");
    r.captioned_table(
        2,
        "Kế hoạch thực tập theo tuần",
        &["Tuần", "Nội dung", "Kết quả mong đợi"],
        &[
            &["1-2", "Làm quen dự án, training thiết kế DB", "Nắm cấu trúc DB dự án"],
            &["3-4", "Thực hành thiết kế bảng, index, constraints", "Hoàn thành thiết kế DB"],
            &["5-6", "Training và thực hành thiết kế màn hình", "Hoàn thành thiết kế Screen"],
            &["7-8", "Training và thực hành thiết kế RESTful API", "Hoàn thành thiết kế API"],
            &["9-10", "Training thiết kế Batch Processing", "Hoàn thành thiết kế Batch"],
            &["11-13", "Thiết kế độc lập, hoàn thành báo cáo", "Báo cáo hoàn chỉnh"],
        ],
        Some(&[2.0, 7.5, 5.5]),
    );

    r.section_title("2.3. Các công việc đã thực hiện");
    r.subsection_title("2.3.1. Thiết kế cơ sở dữ liệu");
    r.body_paragraph(
        "Thiết kế bảng dữ liệu cho phân hệ quản lý đơn hàng: xác định khóa chính, khóa \
         ngoại, ràng buộc và chỉ mục theo chuẩn đặt tên của dự án trên Oracle Database 19c.",
    );
    r.figure_placeholder(2, "Sơ đồ quan hệ thực thể phân hệ đơn hàng");

    r.subsection_title("2.3.2. Thiết kế màn hình");
    r.body_paragraph(
        "Thiết kế đặc tả màn hình nghiệp vụ gồm layout, danh sách item, validation và luồng \
         chuyển màn hình theo template của khách hàng.",
    );

    r.subsection_title("2.3.3. Thiết kế API RESTful");
    r.body_paragraph(
        "Đặc tả endpoint, request/response schema, mã lỗi và quy tắc phân trang cho nhóm \
         API tra cứu đơn hàng.",
    );

    r.subsection_title("2.3.4. Thiết kế Batch Processing");
    r.body_paragraph(
        "Thiết kế job batch tổng hợp dữ liệu cuối ngày bằng Spring Batch: luồng xử lý, \
         bảng trung gian, xử lý lỗi và cơ chế chạy lại.",
    );

    r.section_title("2.4. Công nghệ, công cụ và kỹ thuật sử dụng");
    r.bullet_list(&[
        "Oracle Database 19c, SQL Developer",
        "Spring Boot, Spring Batch",
        "Swagger/OpenAPI cho đặc tả API",
        "Backlog, Git, Slack cho quản lý dự án",
    ]);
}

fn chapter3(r: &mut ReportBuilder) {
    r.chapter_title("Chương 3\nKết quả và đánh giá", true);

    r.section_title("3.1. Kết quả đạt được trong quá trình thực tập");
    r.captioned_table(
        3,
        "Thống kê sản phẩm thiết kế đã hoàn thành",
        &["STT", "Sản phẩm", "Số lượng", "Ghi chú"],
        &[
            &["1", "Tài liệu thiết kế bảng CSDL", "12", "Đã được review"],
            &["2", "Đặc tả màn hình", "6", "Đã được review"],
            &["3", "Đặc tả API", "9", "Đã được review"],
            &["4", "Thiết kế job batch", "3", "Đã được review"],
        ],
        Some(&[1.5, 7.0, 2.5, 4.0]),
    );

    r.section_title("3.2. Kiến thức và kỹ năng tích lũy được");
    r.subsection_title("3.2.1. Kiến thức chuyên môn");
    r.body_paragraph(
        "Hiểu quy trình thiết kế chi tiết trong dự án gia công, nắm được cách tổ chức tài \
         liệu thiết kế và các quy ước chất lượng của khách hàng Nhật Bản.",
    );
    r.subsection_title("3.2.2. Kỹ năng làm việc nhóm");
    r.body_paragraph(
        "Rèn luyện kỹ năng trao đổi trong sprint, nhận và phản hồi góp ý review, quản lý \
         tiến độ công việc cá nhân theo kế hoạch chung của đội.",
    );

    r.section_title("3.3. Thuận lợi và khó khăn");
    r.sub_subsection_title("a) Thuận lợi");
    r.bullet_list(&[
        "Được phân công mentor hướng dẫn trực tiếp",
        "Tài liệu training nội bộ đầy đủ, có ví dụ mẫu",
    ]);
    r.sub_subsection_title("b) Khó khăn");
    r.bullet_list(&[
        "Thuật ngữ nghiệp vụ tiếng Nhật đòi hỏi thời gian làm quen",
        "Chuẩn tài liệu khắt khe, các lỗi nhỏ đều phải chỉnh sửa lại",
    ]);
}

fn chapter4(r: &mut ReportBuilder) {
    r.chapter_title("Chương 4\nNhận xét và định hướng", true);

    r.section_title("4.1. Nhận xét chung về đợt thực tập");
    r.body_paragraph(
        "Đợt thực tập giúp em chuyển từ kiến thức học thuật sang kỹ năng làm việc thực tế. \
         Việc tham gia một dự án đang vận hành cho thấy tầm quan trọng của tài liệu thiết \
         kế chuẩn mực và quy trình review nghiêm ngặt.",
    );

    r.section_title("4.2. Bài học kinh nghiệm rút ra");
    r.bullet_list(&[
        "Đọc kỹ đặc tả trước khi thiết kế, hỏi lại ngay khi chưa rõ",
        "Tuân thủ quy ước đặt tên và template ngay từ đầu để giảm công sửa",
        "Ghi chép lại lỗi đã gặp để không lặp lại ở tài liệu sau",
    ]);

    r.section_title("4.3. Định hướng nghề nghiệp và học tập sau thực tập");
    r.body_paragraph(
        "Sau đợt thực tập, em định hướng phát triển theo con đường kỹ sư backend, tập \
         trung vào thiết kế hệ thống và cơ sở dữ liệu, đồng thời trau dồi thêm tiếng Nhật \
         để làm việc hiệu quả hơn trong các dự án gia công.",
    );
}

fn references(r: &mut ReportBuilder) {
    r.chapter_title("Tài liệu tham khảo", true);
    r.numbered_list(&[
        "Oracle Corp., Oracle Database 19c Documentation, 2023. [Online]. Available: \
         https://docs.oracle.com/en/database/",
        "VMware, Spring Batch Reference Documentation v5.0, 2023. [Online]. Available: \
         https://docs.spring.io/spring-batch/",
        "M. Massé, REST API Design Rulebook. O'Reilly Media, 2011.",
        "Tài liệu thiết kế nội bộ dự án SORA STEP4, SY PARTNERS., JSC (không công khai), 2025.",
    ]);
}

fn appendix(r: &mut ReportBuilder) {
    r.chapter_title("Phụ lục", true);

    r.section_title("Phụ lục A: Nhật ký thực tập");
    r.body_paragraph_flush("Thời gian thực tập: Từ ngày 26/06/2025 đến ngày 26/09/2025");
    r.plain_table(
        &["Tuần", "Thời gian", "Mục tiêu tuần", "Công việc thực hiện", "Kết quả"],
        &[
            &["1-2", "26/06 – 09/07", "Làm quen môi trường", "Tìm hiểu dự án, training thiết kế DB", "Nắm cấu trúc DB"],
            &["3-4", "10/07 – 23/07", "Thiết kế CSDL", "Thực hành thiết kế bảng, index", "Hoàn thành thiết kế DB"],
            &["5-6", "24/07 – 06/08", "Thiết kế màn hình", "Training và thực hành Screen", "Hoàn thành thiết kế Screen"],
            &["7-8", "07/08 – 20/08", "Thiết kế API", "Training và thực hành RESTful API", "Hoàn thành thiết kế API"],
            &["9-10", "21/08 – 03/09", "Thiết kế Batch", "Training thiết kế Batch", "Hoàn thành thiết kế Batch"],
            &["11-13", "04/09 – 26/09", "Hoàn thiện", "Thiết kế độc lập, viết báo cáo", "Báo cáo hoàn chỉnh"],
        ],
        Some(&[1.5, 2.5, 3.0, 5.0, 3.0]),
    );

    r.section_title("Phụ lục B: Hình ảnh, tài liệu minh chứng");
    r.styled_line(
        "[Đính kèm hình ảnh minh chứng quá trình thực tập]",
        LineOptions::default().with_italic(true).with_color("808080"),
    );

    r.section_title("Phụ lục C: Sản phẩm thực tập");
    r.styled_line(
        "[Mô tả hoặc đính kèm các sản phẩm thiết kế đã hoàn thành]",
        LineOptions::default().with_italic(true).with_color("808080"),
    );
}
