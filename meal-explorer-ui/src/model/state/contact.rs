//! 联系表单状态

/// 表单字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// 输入框元素 id
    pub fn element_id(self) -> &'static str {
        match self {
            ContactField::Name => "contactName",
            ContactField::Email => "contactEmail",
            ContactField::Message => "contactMessage",
        }
    }

    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.element_id() == id)
    }

    /// 是否为必填字段
    pub fn is_required(self) -> bool {
        matches!(self, ContactField::Name | ContactField::Email)
    }
}

/// 提交结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// 必填字段缺失，表单保持原值
    MissingRequired,
    /// 模拟提交成功，表单已重置
    Submitted,
}

impl ContactOutcome {
    /// 提示文本
    pub fn notice(self) -> &'static str {
        match self {
            ContactOutcome::MissingRequired => "Please fill in all required fields correctly.",
            ContactOutcome::Submitted => "Form submitted (simulation)!",
        }
    }
}

/// 联系表单
///
/// 只做客户端必填校验，提交不会发起任何网络请求。
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// 校验并提交；成功后清空所有字段
    pub fn submit(&mut self) -> ContactOutcome {
        let missing = ContactField::ALL
            .into_iter()
            .filter(|f| f.is_required())
            .any(|f| self.value(f).trim().is_empty());
        if missing {
            return ContactOutcome::MissingRequired;
        }
        self.reset();
        ContactOutcome::Submitted
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_or_email_never_succeeds() {
        let mut form = ContactForm::new();
        form.set(ContactField::Email, "cook@example.com".into());
        assert_eq!(form.submit(), ContactOutcome::MissingRequired);
        assert_eq!(form.email, "cook@example.com");

        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Sam".into());
        form.set(ContactField::Email, "   ".into());
        assert_eq!(form.submit(), ContactOutcome::MissingRequired);
        assert_eq!(form.name, "Sam");
    }

    #[test]
    fn successful_submit_resets_form() {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Sam".into());
        form.set(ContactField::Email, "sam@example.com".into());
        form.set(ContactField::Message, "More soups please".into());

        assert_eq!(form.submit(), ContactOutcome::Submitted);
        for field in ContactField::ALL {
            assert!(form.value(field).is_empty(), "{field:?} not reset");
        }
    }

    #[test]
    fn message_is_optional() {
        let mut form = ContactForm::new();
        form.set(ContactField::Name, "Sam".into());
        form.set(ContactField::Email, "sam@example.com".into());
        assert_eq!(form.submit(), ContactOutcome::Submitted);
    }
}
