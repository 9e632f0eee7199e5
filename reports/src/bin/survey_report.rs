//! Generates `BAO_CAO_KHAO_SAT.docx` — a user-experience survey report.

use colored::Colorize;
use docforge::{LineOptions, Margins, Metadata, ReportBuilder, StyleSheet};

const OUTPUT: &str = "BAO_CAO_KHAO_SAT.docx";
const STUDENT: &str = "Nguyễn Văn Kiệt";
const LOGO: &str = "assets/logo_utc.png";

fn main() -> docforge::Result<()> {
    env_logger::init();
    println!("Đang tạo báo cáo khảo sát...");

    let styles = StyleSheet::utc();
    let mut r = ReportBuilder::new(styles.clone());
    r.metadata(Metadata::titled(
        "Báo cáo khảo sát trải nghiệm người dùng",
        STUDENT,
    ))
    .set_margins(Margins::new(2.5, 2.5, 3.0, 2.0))
    .page_number_header();

    cover_page(&mut r);
    front_matter(&mut r);
    introduction(&mut r);
    methodology(&mut r);
    results(&mut r);
    conclusion(&mut r);
    references(&mut r);

    docforge::save(&r.finish(), &styles, OUTPUT)?;

    println!("{} {OUTPUT}", "Đã tạo file:".green().bold());
    println!("Cấu trúc báo cáo:");
    println!("  1. Bìa (khung viền, logo UTC)");
    println!("  2. Mục lục + danh mục bảng biểu, hình vẽ");
    println!("  3. Mở đầu + 2 chương nội dung + kết luận");
    println!("  4. Tài liệu tham khảo");
    Ok(())
}

fn cover_page(r: &mut ReportBuilder) {
    r.begin_section(true);
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
    r.logo(LOGO, 3.5);
    r.styled_line(
        "BÁO CÁO KHẢO SÁT",
        LineOptions::default().with_size(22.0).with_bold(true).with_spacing(24.0, 0.0),
    );
    r.styled_line(
        "TRẢI NGHIỆM NGƯỜI DÙNG HỆ THỐNG KITECLASS",
        LineOptions::default().with_size(16.0).with_bold(true).with_spacing(6.0, 24.0),
    );
    r.info_table(
        &[
            ("Sinh viên thực hiện", STUDENT),
            ("Mã sinh viên", "221230890"),
            ("Lớp", "CNTT1-K63"),
            ("Giảng viên hướng dẫn", "ThS. Nguyễn Đức Dư"),
            ("Thời gian khảo sát", "Từ ngày 01/07/2026 đến ngày 31/07/2026"),
        ],
        (5.0, 9.0),
    );
    r.empty_line().empty_line().empty_line();
    r.styled_line(
        "Hà Nội – 2026",
        LineOptions::default().with_size(14.0).with_bold(true).with_italic(true),
    );
}

fn front_matter(r: &mut ReportBuilder) {
    r.begin_section(false);
    r.toc_placeholder();
    r.page_break();
    r.list_of_tables();
    r.page_break();
    r.list_of_figures();
}

fn introduction(r: &mut ReportBuilder) {
    r.chapter_title("Mở đầu", true);
    r.body_paragraph(
        "Khảo sát trải nghiệm người dùng được thực hiện nhằm đánh giá mức độ hài lòng và \
         khả năng sử dụng của hệ thống quản lý lớp học trực tuyến KiteClass sau ba tháng \
         vận hành thử nghiệm tại hai trung tâm đào tạo.",
    );
    r.body_paragraph(
        "Báo cáo trình bày phương pháp khảo sát, kết quả thu thập được và các đề xuất cải \
         tiến rút ra từ phân tích dữ liệu.",
    );
}

fn methodology(r: &mut ReportBuilder) {
    r.chapter_title("Chương 1\nPhương pháp khảo sát", true);

    r.section_title("1.1. Đối tượng và phạm vi khảo sát");
    r.body_paragraph(
        "Đối tượng khảo sát gồm ba nhóm người dùng: giáo viên, học viên và phụ huynh tại \
         hai trung tâm đang sử dụng hệ thống. Phiếu khảo sát được phát trực tuyến qua \
         biểu mẫu tích hợp trong ứng dụng.",
    );
    r.captioned_table(
        1,
        "Cơ cấu mẫu khảo sát",
        &["Nhóm người dùng", "Số phiếu phát ra", "Số phiếu hợp lệ", "Tỷ lệ"],
        &[
            &["Giáo viên", "25", "23", "92%"],
            &["Học viên", "180", "156", "87%"],
            &["Phụ huynh", "60", "41", "68%"],
        ],
        Some(&[5.0, 3.5, 3.5, 2.5]),
    );

    r.section_title("1.2. Thiết kế phiếu khảo sát");
    r.body_paragraph(
        "Phiếu khảo sát gồm 24 câu hỏi chia thành bốn nhóm: thông tin chung, mức độ dễ \
         sử dụng (thang SUS), mức độ hài lòng theo tính năng và câu hỏi mở. Thang đo \
         Likert 5 mức được dùng cho các câu hỏi định lượng.",
    );
    r.figure_placeholder(1, "Mẫu phiếu khảo sát trực tuyến");

    r.section_title("1.3. Quy trình thực hiện");
    r.bullet_list(&[
        "Tuần 1: khảo sát thử trên nhóm 10 người, hiệu chỉnh câu hỏi",
        "Tuần 2-3: phát phiếu chính thức và nhắc phản hồi",
        "Tuần 4: làm sạch dữ liệu, loại phiếu trả lời dưới 2 phút",
    ]);
}

fn results(r: &mut ReportBuilder) {
    r.chapter_title("Chương 2\nKết quả khảo sát", true);

    r.section_title("2.1. Mức độ dễ sử dụng");
    r.body_paragraph(
        "Điểm SUS trung bình toàn hệ thống đạt 78,4 điểm, trên ngưỡng 68 điểm được coi là \
         khả dụng tốt. Nhóm giáo viên đánh giá cao nhất, nhóm phụ huynh thấp nhất do giao \
         diện theo dõi học tập còn nhiều bước thao tác.",
    );
    r.captioned_table(
        2,
        "Điểm SUS theo nhóm người dùng",
        &["Nhóm", "Điểm SUS trung bình", "Độ lệch chuẩn"],
        &[
            &["Giáo viên", "83,1", "7,2"],
            &["Học viên", "78,9", "9,8"],
            &["Phụ huynh", "71,6", "11,3"],
        ],
        Some(&[5.0, 5.0, 4.0]),
    );
    r.figure_placeholder(2, "Phân bố điểm SUS theo nhóm người dùng");

    r.section_title("2.2. Mức độ hài lòng theo tính năng");
    r.captioned_table(
        2,
        "Tỷ lệ hài lòng theo tính năng chính",
        &["Tính năng", "Hài lòng", "Bình thường", "Không hài lòng"],
        &[
            &["Quản lý bài tập", "76%", "18%", "6%"],
            &["Điểm danh tự động", "81%", "14%", "5%"],
            &["Diễn đàn lớp học", "58%", "29%", "13%"],
            &["Cổng phụ huynh", "49%", "32%", "19%"],
        ],
        Some(&[5.5, 3.0, 3.0, 3.5]),
    );

    r.section_title("2.3. Ý kiến từ câu hỏi mở");
    r.bullet_list(&[
        "Đề nghị bổ sung thông báo đẩy khi có bài tập mới",
        "Cổng phụ huynh cần rút gọn số bước xem báo cáo học tập",
        "Mong muốn có ứng dụng di động bản địa thay cho web responsive",
    ]);
}

fn conclusion(r: &mut ReportBuilder) {
    r.chapter_title("Kết luận và đề xuất", true);
    r.body_paragraph(
        "Kết quả khảo sát cho thấy hệ thống đạt mức khả dụng tốt với người dùng trực tiếp \
         là giáo viên và học viên. Điểm cần cải thiện tập trung ở cổng phụ huynh và diễn \
         đàn lớp học.",
    );
    r.bullet_list(&[
        "Thiết kế lại luồng xem báo cáo học tập của phụ huynh còn tối đa 2 bước",
        "Bổ sung thông báo đẩy cho sự kiện bài tập và điểm danh",
        "Khảo sát lặp lại sau mỗi học kỳ để theo dõi xu hướng",
    ]);
}

fn references(r: &mut ReportBuilder) {
    r.chapter_title("Tài liệu tham khảo", true);
    r.numbered_list(&[
        "J. Brooke, \"SUS: A quick and dirty usability scale,\" in Usability Evaluation \
         in Industry, London: Taylor & Francis, 1996.",
        "J. Nielsen, Usability Engineering. San Francisco: Morgan Kaufmann, 1993.",
        "ISO 9241-11:2018, Ergonomics of human-system interaction — Usability: \
         Definitions and concepts.",
    ]);
}
