mod common;

use std::sync::Arc;

use async_graphql::{Request, Variables};
use serde_json::{json, Value};

use common::{roster, InMemoryExamResultRepository, InMemoryStudentRepository};
use school_exam_server::{
    app_state::AppState,
    graphql::{create_schema, Schema},
    models::domain::ExamConfig,
};

const RECORD: &str = r#"
    mutation Record($input: RecordExamResultRequest!) {
        recordExamResult(input: $input) { studentId examType totalScore averageScore }
    }
"#;

const REPORT_CARD: &str = r#"
    query Card($studentId: String!) {
        reportCard(schoolId: "school-1", studentId: $studentId, academicYear: "2024-2025") {
            studentId grandTotal rank rankLabel
            subjects { subject total cells { midterm total } }
        }
    }
"#;

fn schema() -> Schema {
    create_schema(AppState::from_repositories(
        Arc::new(InMemoryExamResultRepository::new()),
        Arc::new(InMemoryStudentRepository::with_students(roster())),
        Arc::new(ExamConfig::default()),
    ))
}

async fn execute(schema: &Schema, query: &str, variables: Value) -> Value {
    let response = schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await;
    serde_json::to_value(&response).expect("response serializes")
}

async fn record(schema: &Schema, student_id: &str, exam_type: &str, scores: &[(&str, f64)]) {
    let input = json!({
        "schoolId": "school-1",
        "studentId": student_id,
        "studentName": format!("Name {}", student_id),
        "classroomId": "class-1",
        "classroomName": "Form 1",
        "academicYear": "2024-2025",
        "examType": exam_type,
        "subjects": scores
            .iter()
            .map(|(name, score)| json!({ "subjectName": name, "score": score }))
            .collect::<Vec<_>>(),
    });
    let body = execute(schema, RECORD, json!({ "input": input })).await;
    assert!(body.get("errors").is_none(), "unexpected errors: {}", body);
}

#[tokio::test]
async fn record_exam_result_returns_sitting_totals() {
    let schema = schema();

    let input = json!({
        "schoolId": "school-1",
        "studentId": "stu-a",
        "studentName": "Ayaan Abdi",
        "classroomId": "class-1",
        "classroomName": "Form 1",
        "academicYear": "2024-2025",
        "examType": "FINAL_EXAM",
        "subjects": [
            { "subjectName": "REL", "score": 45.0 },
            { "subjectName": "ENG", "score": 35.0 }
        ],
    });
    let body = execute(&schema, RECORD, json!({ "input": input })).await;

    let recorded = &body["data"]["recordExamResult"];
    assert_eq!(recorded["studentId"], "stu-a");
    assert_eq!(recorded["examType"], "FINAL_EXAM");
    assert_eq!(recorded["totalScore"], 80.0);
    assert_eq!(recorded["averageScore"], 40.0);
}

#[tokio::test]
async fn report_card_and_class_ranking_agree() {
    let schema = schema();
    record(&schema, "stu-a", "FINAL_EXAM", &[("REL", 45.0), ("ENG", 35.0)]).await;
    record(&schema, "stu-b", "FINAL_EXAM", &[("REL", 40.0)]).await;
    record(&schema, "stu-b", "MID_EXAM", &[("REL", 20.0)]).await;

    let card = execute(&schema, REPORT_CARD, json!({ "studentId": "stu-a" })).await;
    let card = &card["data"]["reportCard"];
    assert_eq!(card["grandTotal"], 80.0);
    assert_eq!(card["rank"], 1);
    assert_eq!(card["rankLabel"], "1 of 3");
    assert_eq!(card["subjects"][0]["subject"], "REL");
    assert_eq!(card["subjects"][0]["cells"]["midterm"], "-");
    assert_eq!(card["subjects"][0]["cells"]["total"], "45");

    let ranking = execute(
        &schema,
        r#"{
            classRanking(schoolId: "school-1", classroom: "Form 1", academicYear: "2024-2025") {
                examView
                students { studentId rank grandTotal }
            }
        }"#,
        json!({}),
    )
    .await;
    let ranking = &ranking["data"]["classRanking"];
    assert_eq!(ranking["examView"], "Yearly Exam Total");
    let students = ranking["students"].as_array().expect("students");
    let order: Vec<(&str, u64)> = students
        .iter()
        .map(|s| {
            (
                s["studentId"].as_str().unwrap_or_default(),
                s["rank"].as_u64().unwrap_or_default(),
            )
        })
        .collect();
    assert_eq!(order, vec![("stu-a", 1), ("stu-b", 2), ("stu-c", 3)]);

    let final_only = execute(
        &schema,
        r#"{
            classRanking(schoolId: "school-1", classroom: "Form 1",
                         academicYear: "2024-2025", examType: FINAL_EXAM) {
                examView
                students { studentId grandTotal }
            }
        }"#,
        json!({}),
    )
    .await;
    assert_eq!(final_only["data"]["classRanking"]["examView"], "Final Exam");
    assert_eq!(
        final_only["data"]["classRanking"]["students"]
            .as_array()
            .map(Vec::len),
        Some(2)
    );
}

#[tokio::test]
async fn unknown_student_reports_not_found_code() {
    let schema = schema();

    let body = execute(&schema, REPORT_CARD, json!({ "studentId": "stu-z" })).await;

    assert_eq!(body["errors"][0]["extensions"]["code"], "NOT_FOUND");
    assert!(body["errors"][0]["message"]
        .as_str()
        .unwrap_or_default()
        .contains("stu-z"));
}

#[tokio::test]
async fn malformed_academic_year_is_a_validation_error() {
    let schema = schema();

    let body = execute(
        &schema,
        r#"{ classReportCards(schoolId: "school-1", classroom: "Form 1", academicYear: "2024") { sortedByRank } }"#,
        json!({}),
    )
    .await;

    assert_eq!(body["errors"][0]["extensions"]["code"], "VALIDATION_ERROR");
}
