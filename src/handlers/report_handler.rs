use actix_web::{get, web, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::ExamView,
        dto::{
            request::{AcademicYearQuery, PrintAllQuery, RankingQuery},
            response::{ClassRankingDto, ClassReportCardsDto, ExamConfigDto, ReportCardDto},
        },
    },
};

#[get("/api/schools/{school_id}/students/{student_id}/report-card")]
pub async fn get_report_card(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    query: web::Query<AcademicYearQuery>,
) -> Result<HttpResponse, AppError> {
    let (school_id, student_id) = path.into_inner();
    query.validate()?;

    let report = state
        .report_service
        .report_card(&school_id, &student_id, &query.academic_year)
        .await?;
    Ok(HttpResponse::Ok().json(ReportCardDto::from(report)))
}

#[get("/api/schools/{school_id}/classrooms/{classroom}/rankings")]
pub async fn get_class_ranking(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    query: web::Query<RankingQuery>,
) -> Result<HttpResponse, AppError> {
    let (school_id, classroom) = path.into_inner();
    query.validate()?;
    let view = ExamView::parse(query.exam_type.as_deref())?;

    let ranking = state
        .report_service
        .class_ranking(&school_id, &classroom, &query.academic_year, view)
        .await?;

    Ok(HttpResponse::Ok().json(ClassRankingDto {
        classroom_name: classroom,
        academic_year: query.academic_year.clone(),
        exam_view: view.to_string(),
        students: ranking.into_students(),
    }))
}

#[get("/api/schools/{school_id}/classrooms/{classroom}/report-cards")]
pub async fn get_class_report_cards(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
    query: web::Query<PrintAllQuery>,
) -> Result<HttpResponse, AppError> {
    let (school_id, classroom) = path.into_inner();
    query.validate()?;

    let reports = state
        .report_service
        .print_all(&school_id, &classroom, &query.academic_year, query.sort_by_rank)
        .await?;

    Ok(HttpResponse::Ok().json(ClassReportCardsDto {
        classroom_name: classroom,
        academic_year: query.academic_year.clone(),
        sorted_by_rank: query.sort_by_rank,
        reports: reports.into_iter().map(ReportCardDto::from).collect(),
    }))
}

#[get("/api/exam-config")]
pub async fn get_exam_config(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ExamConfigDto::from(state.report_service.exam_config()))
}
