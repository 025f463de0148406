use serde::{Deserialize, Serialize};

use std::hash::{Hash, Hasher};

/// カテゴリエンティティ
/// 同一性はカテゴリコードのみで判定する
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    code: String,
    name: String,
    description: Option<String>,
    active: bool,
}

impl Category {
    /// 新しいカテゴリを作成
    /// 作成直後のカテゴリは有効状態
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            description,
            active: true,
        }
    }

    /// 同一性の判定に使うキー
    pub fn key(&self) -> &str {
        &self.code
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
