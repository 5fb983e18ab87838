use crate::solver::MstResult;

pub fn format_log_method_result(method: &str, id: i64, result: &MstResult) -> String {
    format!("{method} on graph {id} - {}", format_log_result(result))
}

pub fn format_log_result(result: &MstResult) -> String {
    format!(
        "{}/{}/{}, took: {}",
        result.total_weight,
        result.edges.len(),
        result.operations,
        result.time,
    )
}
