//! Canned messages behind the suggested-prompt and quick-action buttons.

#[cfg(test)]
#[path = "prompts_test.rs"]
mod prompts_test;

/// Prompts offered under an empty transcript; clicking one sends it.
pub const SUGGESTED_PROMPTS: &[&str] = &[
    "Show me my products",
    "What are my recent orders?",
    "Who are my top customers?",
    "Tell me about my store",
];

/// Sidebar shortcuts that send a fixed message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuickAction {
    Products,
    Orders,
    Customers,
    CreateProduct,
}

impl QuickAction {
    pub const ALL: [Self; 4] = [Self::Products, Self::Orders, Self::Customers, Self::CreateProduct];

    /// Stable action key, used as the button's `data-action`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Orders => "orders",
            Self::Customers => "customers",
            Self::CreateProduct => "create-product",
        }
    }

    /// Look up an action by key; unknown keys have no action.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.key() == key)
    }

    /// Message sent when the action is clicked.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Products => "Show me my products",
            Self::Orders => "Show me my recent orders",
            Self::Customers => "Show me my customers",
            Self::CreateProduct => "How can I create a new product?",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Products => "View Products",
            Self::Orders => "Recent Orders",
            Self::Customers => "Customers",
            Self::CreateProduct => "Create Product",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Products => "fas fa-box",
            Self::Orders => "fas fa-shopping-cart",
            Self::Customers => "fas fa-users",
            Self::CreateProduct => "fas fa-plus",
        }
    }
}
