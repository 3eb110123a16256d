//! Cross-cutting helpers shared by the service and server crates.

pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_status() {
        let h = types::Health { status: "ok" };
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json, serde_json::json!({"status": "ok"}));
    }

    #[test]
    fn status_ok_body() {
        let body = serde_json::to_value(types::StatusOk::default()).unwrap();
        assert_eq!(body["status"], "ok");
    }
}
