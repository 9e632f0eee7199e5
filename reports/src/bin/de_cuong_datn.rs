//! Generates `DE_CUONG_DATN.docx` — the bachelor thesis outline
//! (đề cương đồ án tốt nghiệp).

use colored::Colorize;
use docforge::model::Alignment;
use docforge::{LineOptions, Margins, Metadata, ReportBuilder, StyleSheet};

const OUTPUT: &str = "DE_CUONG_DATN.docx";
const STUDENT: &str = "Nguyễn Văn Kiệt";
const ADVISOR: &str = "ThS. Nguyễn Đức Dư";
const THESIS_TITLE: &str = "Xây dựng hệ thống quản lý lớp học trực tuyến theo kiến trúc \
                            Microservices - KiteClass Platform";

fn main() -> docforge::Result<()> {
    env_logger::init();
    println!("Đang tạo Đề cương Đồ án Tốt nghiệp...");

    let styles = StyleSheet::utc();
    let mut r = ReportBuilder::new(styles.clone());
    r.metadata(Metadata::titled("Đề cương Đồ án Tốt nghiệp", STUDENT))
        .set_margins(Margins::new(2.0, 2.0, 2.5, 2.0));

    header(&mut r);
    student_info(&mut r);
    advisor_info(&mut r);
    thesis_title(&mut r);
    content_sections(&mut r);
    signatures(&mut r);

    docforge::save(&r.finish(), &styles, OUTPUT)?;

    println!("{} {OUTPUT}", "Đã tạo file:".green().bold());
    println!("Cấu trúc đề cương:");
    println!("  - Thông tin sinh viên: {STUDENT} - 221230890");
    println!("  - Giảng viên hướng dẫn: {ADVISOR}");
    println!("  - 4 mục nội dung chính + bảng kế hoạch");
    println!("  - Chữ ký 4 bên");
    Ok(())
}

fn header(r: &mut ReportBuilder) {
    r.styled_line(
        "TRƯỜNG ĐẠI HỌC GIAO THÔNG VẬN TẢI",
        LineOptions::default().with_size(12.0).with_bold(true),
    );
    r.styled_line(
        "KHOA CÔNG NGHỆ THÔNG TIN",
        LineOptions::default()
            .with_size(12.0)
            .with_bold(true)
            .with_underline(true)
            .with_spacing(0.0, 12.0),
    );
    r.styled_line(
        "CỘNG HÒA XÃ HỘI CHỦ NGHĨA VIỆT NAM",
        LineOptions::default().with_size(12.0).with_bold(true),
    );
    r.styled_line(
        "Độc lập – Tự do – Hạnh phúc",
        LineOptions::default()
            .with_size(12.0)
            .with_bold(true)
            .with_underline(true)
            .with_spacing(0.0, 18.0),
    );
    r.styled_line(
        "Hà Nội, ngày ... tháng ... năm 2026",
        LineOptions::default()
            .with_italic(true)
            .with_alignment(Alignment::Right)
            .with_spacing(0.0, 18.0),
    );
    r.styled_line(
        "ĐỀ CƯƠNG ĐỒ ÁN TỐT NGHIỆP CỬ NHÂN",
        LineOptions::default().with_size(16.0).with_bold(true).with_spacing(0.0, 18.0),
    );
}

fn student_info(r: &mut ReportBuilder) {
    r.sub_subsection_title("Thông tin sinh viên:");
    r.labeled_value_lines(&[
        ("Họ và tên", STUDENT),
        ("Mã sinh viên", "221230890"),
        ("Lớp", "CNTT1-K63"),
        ("Ngành đào tạo", "Công nghệ thông tin"),
        ("Hệ đào tạo", "Chính quy"),
    ]);
}

fn advisor_info(r: &mut ReportBuilder) {
    r.sub_subsection_title("Giảng viên hướng dẫn:");
    r.labeled_value_lines(&[
        ("Họ và tên", ADVISOR),
        ("Đơn vị công tác", "Khoa Công nghệ thông tin - Trường ĐH GTVT"),
    ]);
}

fn thesis_title(r: &mut ReportBuilder) {
    r.sub_subsection_title("Tên đề tài:");
    r.styled_line(
        THESIS_TITLE,
        LineOptions::default().with_size(14.0).with_bold(true).with_spacing(6.0, 12.0),
    );
}

fn content_sections(r: &mut ReportBuilder) {
    r.section_title("1. Nội dung, phạm vi của đề tài");
    r.body_paragraph(
        "Đề tài xây dựng nền tảng quản lý lớp học trực tuyến theo kiến trúc microservices, \
         cho phép các trung tâm đào tạo tự triển khai không gian lớp học riêng. Phạm vi bao \
         gồm quản lý khóa học, bài tập, điểm danh, phụ huynh và hệ thống thanh toán.",
    );
    r.bullet_list(&[
        "Phân hệ KiteHub: quản lý tenant, billing và tự động cấp phát hạ tầng",
        "Phân hệ KiteClass: các dịch vụ lõi cho lớp học trực tuyến",
        "Tích hợp AI Agent hỗ trợ tự động hóa nhận diện thương hiệu",
    ]);

    r.section_title("2. Công nghệ, công cụ và ngôn ngữ lập trình");
    r.bullet_list(&[
        "Backend: Java 21, Spring Boot 3, Spring Cloud",
        "Frontend: Next.js, TypeScript",
        "Hạ tầng: Kubernetes, AWS EKS, PostgreSQL, Redis",
        "Kiểm thử: JUnit, Mockito, Testcontainers, JMeter",
    ]);

    r.section_title("3. Các kết quả chính dự kiến đạt được");
    r.bullet_list(&[
        "Hệ thống chạy được trên môi trường production với kiến trúc multi-tenant",
        "Tài liệu phân tích thiết kế đầy đủ (use case, ERD, đặc tả API)",
        "Bộ kiểm thử tự động đạt độ phủ tối thiểu 80%",
        "Báo cáo đồ án và slide bảo vệ",
    ]);

    r.section_title("4. Kế hoạch thực hiện đề tài");
    r.body_paragraph(
        "Kế hoạch thực hiện được lập theo các giai đoạn chính, tổng thời gian khoảng 4 tháng \
         (từ tháng 2/2026 đến tháng 5/2026), có thể điều chỉnh theo góp ý của giảng viên \
         hướng dẫn và tiến độ thực tế.",
    );
    r.captioned_table(
        1,
        "Kế hoạch thực hiện đề tài",
        &["STT", "Nội dung công việc", "Thời gian dự kiến", "Ghi chú"],
        &[
            &["1", "Nghiên cứu công nghệ, phân tích yêu cầu", "01/02 – 21/02/2026", "Use case, user stories"],
            &["2", "Thiết kế kiến trúc, CSDL và đặc tả API", "22/02 – 07/03/2026", "ERD, OpenAPI"],
            &["3", "Xây dựng phân hệ KiteHub", "08/03 – 28/03/2026", "Auth, tenant, billing"],
            &["4", "Xây dựng các dịch vụ lõi KiteClass", "29/03 – 25/04/2026", "Course, assignment, attendance"],
            &["5", "Xây dựng các dịch vụ mở rộng", "26/04 – 10/05/2026", "Parent, gamification, forum"],
            &["6", "Kiểm thử và triển khai production", "11/05 – 25/05/2026", "Unit, integration, load test"],
            &["7", "Hoàn thiện báo cáo, chuẩn bị bảo vệ", "26/05 – 31/05/2026", "Slides, demo"],
        ],
        Some(&[1.2, 7.5, 4.5, 3.0]),
    );
}

fn signatures(r: &mut ReportBuilder) {
    r.signature_block(&[
        "Trưởng Khoa",
        "Trưởng Bộ môn",
        "Giảng viên hướng dẫn",
        "Sinh viên thực hiện",
    ]);
}
