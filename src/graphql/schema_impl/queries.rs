use async_graphql::{Context, Object};

use crate::{
    app_state::AppState,
    graphql::helpers::{exam_view, to_graphql_error, validate_academic_year},
    models::{
        domain::{ExamResult, ExamType},
        dto::response::{ClassRankingDto, ClassReportCardsDto, ExamConfigDto, ReportCardDto},
    },
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Leaving `exam_type` out ranks by the yearly total.
    async fn class_ranking(
        &self,
        ctx: &Context<'_>,
        school_id: String,
        classroom: String,
        academic_year: String,
        exam_type: Option<ExamType>,
    ) -> async_graphql::Result<ClassRankingDto> {
        let state = ctx.data::<AppState>()?;
        validate_academic_year(&academic_year).map_err(to_graphql_error)?;
        let view = exam_view(exam_type);

        let ranking = state
            .report_service
            .class_ranking(&school_id, &classroom, &academic_year, view)
            .await
            .map_err(to_graphql_error)?;

        Ok(ClassRankingDto {
            classroom_name: classroom,
            academic_year,
            exam_view: view.to_string(),
            students: ranking.into_students(),
        })
    }

    async fn report_card(
        &self,
        ctx: &Context<'_>,
        school_id: String,
        student_id: String,
        academic_year: String,
    ) -> async_graphql::Result<ReportCardDto> {
        let state = ctx.data::<AppState>()?;
        validate_academic_year(&academic_year).map_err(to_graphql_error)?;

        let report = state
            .report_service
            .report_card(&school_id, &student_id, &academic_year)
            .await
            .map_err(to_graphql_error)?;
        Ok(report.into())
    }

    async fn class_report_cards(
        &self,
        ctx: &Context<'_>,
        school_id: String,
        classroom: String,
        academic_year: String,
        #[graphql(default)] sort_by_rank: bool,
    ) -> async_graphql::Result<ClassReportCardsDto> {
        let state = ctx.data::<AppState>()?;
        validate_academic_year(&academic_year).map_err(to_graphql_error)?;

        let reports = state
            .report_service
            .print_all(&school_id, &classroom, &academic_year, sort_by_rank)
            .await
            .map_err(to_graphql_error)?;

        Ok(ClassReportCardsDto {
            classroom_name: classroom,
            academic_year,
            sorted_by_rank: sort_by_rank,
            reports: reports.into_iter().map(ReportCardDto::from).collect(),
        })
    }

    async fn student_exam_results(
        &self,
        ctx: &Context<'_>,
        school_id: String,
        student_id: String,
    ) -> async_graphql::Result<Vec<ExamResult>> {
        let state = ctx.data::<AppState>()?;
        state
            .exam_result_service
            .student_results(&school_id, &student_id)
            .await
            .map_err(to_graphql_error)
    }

    async fn exam_config(&self, ctx: &Context<'_>) -> async_graphql::Result<ExamConfigDto> {
        let state = ctx.data::<AppState>()?;
        Ok(ExamConfigDto::from(state.report_service.exam_config()))
    }
}
