//! 路径参数提取器
//!
//! 在进入处理函数前校验路径参数，非法值直接返回 400 统一响应。

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

fn bad_path_parameter(message: String) -> actix_web::Error {
    let response =
        HttpResponse::BadRequest().json(ApiResponse::error_empty(ErrorCode::BadRequest, &message));
    InternalError::from_response(message, response).into()
}

/// 解析正整数路径参数
fn parse_positive_id(req: &HttpRequest, name: &str) -> Result<i32, actix_web::Error> {
    let raw = req
        .match_info()
        .get(name)
        .ok_or_else(|| bad_path_parameter(format!("Missing path parameter: {name}")))?;

    match raw.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(bad_path_parameter(format!(
            "Invalid {name}: must be a positive integer"
        ))),
    }
}

/// 课程 ID（路径参数 `course_id`）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeCourseId(pub i32);

impl FromRequest for SafeCourseId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(parse_positive_id(req, "course_id").map(SafeCourseId))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test, web};

    async fn echo(id: SafeCourseId) -> HttpResponse {
        HttpResponse::Ok().body(id.0.to_string())
    }

    #[actix_web::test]
    async fn test_course_id_extraction() {
        let app = test::init_service(
            App::new().route("/courses/{course_id}", web::get().to(echo)),
        )
        .await;

        let ok = test::call_service(&app, test::TestRequest::get().uri("/courses/42").to_request()).await;
        assert_eq!(ok.status(), StatusCode::OK);
        assert_eq!(test::read_body(ok).await, "42");

        for bad in ["/courses/abc", "/courses/0", "/courses/-3"] {
            let res = test::call_service(&app, test::TestRequest::get().uri(bad).to_request()).await;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{bad}");
        }
    }
}
