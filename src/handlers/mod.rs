pub mod exam_result_handler;
pub mod health_handler;
pub mod report_handler;

use actix_web::web;

pub use exam_result_handler::{get_student_exam_results, record_exam_result};
pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use report_handler::{
    get_class_ranking, get_class_report_cards, get_exam_config, get_report_card,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(health_check_live)
        .service(health_check_ready)
        .service(record_exam_result)
        .service(get_student_exam_results)
        .service(get_report_card)
        .service(get_class_ranking)
        .service(get_class_report_cards)
        .service(get_exam_config);
}
