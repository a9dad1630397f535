use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState, errors::AppError, models::dto::request::RecordExamResultRequest,
};

#[post("/api/exam-results")]
pub async fn record_exam_result(
    state: web::Data<AppState>,
    request: web::Json<RecordExamResultRequest>,
) -> Result<HttpResponse, AppError> {
    let result = state
        .exam_result_service
        .record(request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(result))
}

#[get("/api/schools/{school_id}/students/{student_id}/exam-results")]
pub async fn get_student_exam_results(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (school_id, student_id) = path.into_inner();
    let results = state
        .exam_result_service
        .student_results(&school_id, &student_id)
        .await?;
    Ok(HttpResponse::Ok().json(results))
}
