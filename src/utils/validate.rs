use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Z|a-z]{2,}$").expect("Invalid email regex")
});

/// 邮箱规范化：去空格并转小写
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    // 邮箱格式校验：必须包含 @ 和 .
    if !EMAIL_RE.is_match(email) {
        return Err("Email format is invalid");
    }
    Ok(())
}

/// 教师编号：非空且不超过 50 个字符
pub fn validate_teacher_id(teacher_id: &str) -> Result<(), &'static str> {
    let teacher_id = teacher_id.trim();
    if teacher_id.is_empty() {
        return Err("teacherId must not be empty");
    }
    if teacher_id.chars().count() > 50 {
        return Err("teacherId must be at most 50 characters");
    }
    Ok(())
}
