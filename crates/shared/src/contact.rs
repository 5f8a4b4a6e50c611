use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;

/// Loose `local@domain.tld` check, the same one browsers and the relay agree on.
pub static EMAIL_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern must compile")
});

#[derive(
    EnumString,
    Display,
    VariantArray,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    /// `animatime` is the code older forms post.
    #[strum(to_string = "product", serialize = "animatime")]
    #[serde(alias = "animatime")]
    Product,
    Consulting,
    Development,
    Partnership,
    Other,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "一般的なお問い合わせ",
            Self::Product => "AnimaTimeについて",
            Self::Consulting => "技術コンサルティングについて",
            Self::Development => "開発案件について",
            Self::Partnership => "業務提携について",
            Self::Other => "その他",
        }
    }
}

/// Display label for a raw category code. Unknown codes are shown as sent.
pub fn category_label(raw: &str) -> &str {
    raw.parse::<Category>().map(Category::label).unwrap_or(raw)
}

/// Form fields addressable by name, as the browser posts them.
#[derive(EnumString, Display, VariantArray, Clone, Copy, Debug, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Company,
    Email,
    Phone,
    Category,
    Message,
}

/// Missing keys and `null` both read as an empty field.
#[derive(Validate, Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ContactSubmission {
    #[validate(length(min = 1, code = "required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub company: String,
    #[validate(
        length(min = 1, code = "required"),
        regex(path = *EMAIL_FORMAT, code = "email_format")
    )]
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_general")]
    pub category: String,
    #[validate(length(min = 1, code = "required"))]
    #[serde(deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_general<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .unwrap_or_else(|| Category::default().to_string()))
}

impl Default for ContactSubmission {
    fn default() -> Self {
        Self {
            name: String::new(),
            company: String::new(),
            email: String::new(),
            phone: String::new(),
            category: Category::default().to_string(),
            message: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("必須項目が入力されていません")]
    MissingRequired,
    #[error("メールアドレスの形式が正しくありません")]
    InvalidEmail,
}

impl ContactSubmission {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Company => &self.company,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Category => &self.category,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Company => &mut self.company,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Category => &mut self.category,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn category_label(&self) -> &str {
        category_label(&self.category)
    }

    /// Missing required fields take precedence over a malformed email.
    pub fn check(&self) -> Result<(), Rejection> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };

        let missing = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .any(|err| err.code == "required");

        if missing {
            Err(Rejection::MissingRequired)
        } else {
            Err(Rejection::InvalidEmail)
        }
    }
}

/// Envelope returned by the relay and expected back by the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactResponse {
    pub fn ok(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactSubmission {
        ContactSubmission {
            name: "山田太郎".to_owned(),
            email: "taro@example.co.jp".to_owned(),
            message: "資料をお送りください".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn default_draft_is_empty_general() {
        let draft = ContactSubmission::default();
        assert_eq!(draft.category, "general");
        assert!(draft.name.is_empty() && draft.email.is_empty() && draft.message.is_empty());
        assert_eq!(draft.check(), Err(Rejection::MissingRequired));
    }

    #[test]
    fn email_format() {
        for ok in ["a@b.c", "taro.yamada+web@tooniq.co.jp"] {
            assert!(EMAIL_FORMAT.is_match(ok), "{ok}");
        }
        for bad in ["bad-email", "a@b", "a b@c.d", "@b.c", "a@.c", "a@@b.c"] {
            assert!(!EMAIL_FORMAT.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn check_prefers_missing_over_format() {
        let mut draft = filled();
        assert_eq!(draft.check(), Ok(()));

        draft.email = "bad-email".to_owned();
        assert_eq!(draft.check(), Err(Rejection::InvalidEmail));

        draft.message.clear();
        assert_eq!(draft.check(), Err(Rejection::MissingRequired));
    }

    #[test]
    fn optional_fields_do_not_block() {
        let mut draft = filled();
        draft.company.clear();
        draft.phone.clear();
        draft.category = "something-new".to_owned();
        assert_eq!(draft.check(), Ok(()));
    }

    #[test]
    fn labels_fall_back_to_raw_code() {
        assert_eq!(category_label("consulting"), "技術コンサルティングについて");
        assert_eq!(category_label("product"), "AnimaTimeについて");
        assert_eq!(category_label("animatime"), "AnimaTimeについて");
        assert_eq!(Category::Product.to_string(), "product");
        assert_eq!(category_label("unknown"), "unknown");
        for category in Category::VARIANTS {
            assert_eq!(category_label(category.as_ref()), category.label());
        }
    }

    #[test]
    fn missing_keys_deserialize_as_empty() {
        let draft: ContactSubmission =
            serde_json::from_str(r#"{"name":"A","email":"bad-email","message":"hi"}"#).unwrap();
        assert_eq!(draft.company, "");
        assert_eq!(draft.category, "general");
        assert_eq!(draft.check(), Err(Rejection::InvalidEmail));
    }

    #[test]
    fn null_fields_deserialize_as_empty() {
        let draft: ContactSubmission = serde_json::from_str(
            r#"{"name":"A","company":null,"email":"a@b.co","phone":null,"category":null,"message":"hi"}"#,
        )
        .unwrap();
        assert_eq!(draft.company, "");
        assert_eq!(draft.phone, "");
        assert_eq!(draft.category, "general");
        assert_eq!(draft.check(), Ok(()));

        let draft: ContactSubmission =
            serde_json::from_str(r#"{"name":null,"email":"a@b.co","message":"hi"}"#).unwrap();
        assert_eq!(draft.check(), Err(Rejection::MissingRequired));
    }

    #[test]
    fn fields_by_name() {
        let mut draft = ContactSubmission::default();
        let field: Field = "phone".parse().unwrap();
        draft.set(field, "03-0000-0000");
        assert_eq!(draft.get(Field::Phone), "03-0000-0000");
        assert!("address".parse::<Field>().is_err());
    }

    #[test]
    fn response_envelope_shape() {
        let failed = serde_json::to_value(ContactResponse::failed("x")).unwrap();
        assert_eq!(failed, serde_json::json!({"success": false, "error": "x"}));

        let ok = serde_json::to_value(ContactResponse::ok(serde_json::json!({"id": "1"}))).unwrap();
        assert_eq!(ok, serde_json::json!({"success": true, "data": {"id": "1"}}));
    }
}
