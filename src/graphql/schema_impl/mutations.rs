use async_graphql::{Context, Object};

use crate::{
    app_state::AppState, graphql::helpers::to_graphql_error,
    models::{domain::ExamResult, dto::request::RecordExamResultRequest},
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Creates or replaces the student's result for one sitting.
    async fn record_exam_result(
        &self,
        ctx: &Context<'_>,
        input: RecordExamResultRequest,
    ) -> async_graphql::Result<ExamResult> {
        let state = ctx.data::<AppState>()?;
        state
            .exam_result_service
            .record(input)
            .await
            .map_err(to_graphql_error)
    }
}
