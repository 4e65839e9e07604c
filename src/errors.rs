//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称和对应的 HTTP 状态码。

use actix_web::http::StatusCode;
use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - status_code() 方法 - 返回 HTTP 状态码
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_courseload_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CourseLoadError {
            $($variant(String),)*
        }

        impl CourseLoadError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CourseLoadError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CourseLoadError::$variant(_) => $type_name,)*
                }
            }

            /// 获取对应的 HTTP 状态码
            pub fn status_code(&self) -> StatusCode {
                match self {
                    $(CourseLoadError::$variant(_) => StatusCode::$status,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CourseLoadError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CourseLoadError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CourseLoadError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_courseload_errors! {
    DatabaseConfig("E001", "Database Configuration Error", INTERNAL_SERVER_ERROR),
    DatabaseConnection("E002", "Database Connection Error", INTERNAL_SERVER_ERROR),
    DatabaseOperation("E003", "Database Operation Error", INTERNAL_SERVER_ERROR),
    FileOperation("E004", "File Operation Error", INTERNAL_SERVER_ERROR),
    Serialization("E005", "Serialization Error", INTERNAL_SERVER_ERROR),
    Token("E006", "Token Error", INTERNAL_SERVER_ERROR),
    Validation("E007", "Validation Error", BAD_REQUEST),
    NotFound("E008", "Resource Not Found", NOT_FOUND),
    Authentication("E009", "Authentication Error", UNAUTHORIZED),
    Authorization("E010", "Authorization Error", FORBIDDEN),
}

impl CourseLoadError {
    /// 是否为需要重新登录的认证错误
    pub fn is_authentication(&self) -> bool {
        matches!(self, CourseLoadError::Authentication(_))
    }

    /// 是否为服务端内部错误（不应把细节暴露给调用方）
    pub fn is_internal(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for CourseLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CourseLoadError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for CourseLoadError {
    fn from(err: sea_orm::DbErr) -> Self {
        CourseLoadError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for CourseLoadError {
    fn from(err: std::io::Error) -> Self {
        CourseLoadError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for CourseLoadError {
    fn from(err: serde_json::Error) -> Self {
        CourseLoadError::Serialization(err.to_string())
    }
}

impl From<jsonwebtoken::errors::Error> for CourseLoadError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        CourseLoadError::Token(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CourseLoadError>;
