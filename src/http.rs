//! Response envelope shared by HTTP-facing services.

use serde::Serialize;

/// The status codes the toolkit cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpStatus {
    Ok,
    Created,
    Accepted,
    NoContent,
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    TooManyRequests,
    InternalServerError,
    BadGateway,
    ServiceUnavailable,
}

impl HttpStatus {
    /// The numeric wire value.
    pub fn value(&self) -> u16 {
        match self {
            HttpStatus::Ok => 200,
            HttpStatus::Created => 201,
            HttpStatus::Accepted => 202,
            HttpStatus::NoContent => 204,
            HttpStatus::BadRequest => 400,
            HttpStatus::Unauthorized => 401,
            HttpStatus::Forbidden => 403,
            HttpStatus::NotFound => 404,
            HttpStatus::Conflict => 409,
            HttpStatus::TooManyRequests => 429,
            HttpStatus::InternalServerError => 500,
            HttpStatus::BadGateway => 502,
            HttpStatus::ServiceUnavailable => 503,
        }
    }
}

/// A response envelope: status code, optional message, optional payload,
/// and a list of error messages. Absent fields stay off the wire.
#[derive(Debug, Serialize)]
pub struct CommonResponse<T> {
    status_code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<T>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    error_messages: Vec<String>,
}

impl<T> CommonResponse<T> {
    fn build(
        status: HttpStatus,
        message: Option<String>,
        payload: Option<T>,
        error_messages: Vec<String>,
    ) -> Self {
        Self {
            status_code: status.value(),
            message,
            payload,
            error_messages,
        }
    }

    /// A `200 OK` carrying the payload.
    pub fn ok(payload: T) -> Self {
        Self::build(HttpStatus::Ok, None, Some(payload), Vec::new())
    }

    /// A status plus message plus payload.
    pub fn of(status: HttpStatus, message: impl Into<String>, payload: T) -> Self {
        Self::build(status, Some(message.into()), Some(payload), Vec::new())
    }

    /// A status plus message, no payload.
    pub fn of_message(status: HttpStatus, message: impl Into<String>) -> Self {
        Self::build(status, Some(message.into()), None, Vec::new())
    }

    /// A status plus payload, no message.
    pub fn of_payload(status: HttpStatus, payload: T) -> Self {
        Self::build(status, None, Some(payload), Vec::new())
    }

    /// A status plus error messages.
    pub fn of_errors(status: HttpStatus, error_messages: Vec<String>) -> Self {
        Self::build(status, None, None, error_messages)
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn error_messages(&self) -> &[String] {
        &self.error_messages
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    use super::{CommonResponse, HttpStatus};

    #[derive(Serialize)]
    struct Payload {
        id: u32,
    }

    #[test]
    fn ok_wraps_the_payload() {
        let response = CommonResponse::ok(Payload { id: 7 });
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.payload().unwrap().id, 7);
        assert!(response.message().is_none());
    }

    #[test]
    fn absent_fields_stay_off_the_wire() {
        let response = CommonResponse::<()>::of_message(HttpStatus::NotFound, "no such order");
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"status_code":404,"message":"no such order"}"#
        );
    }

    #[test]
    fn errors_serialize_as_a_list() {
        let response = CommonResponse::<()>::of_errors(
            HttpStatus::BadRequest,
            vec!["missing id".to_string(), "bad date".to_string()],
        );
        assert_eq!(response.error_messages().len(), 2);
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"status_code":400,"error_messages":["missing id","bad date"]}"#
        );
    }

    #[test]
    fn status_values() {
        assert_eq!(HttpStatus::Ok.value(), 200);
        assert_eq!(HttpStatus::TooManyRequests.value(), 429);
        assert_eq!(HttpStatus::ServiceUnavailable.value(), 503);
    }
}
