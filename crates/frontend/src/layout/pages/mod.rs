//! Page keys of the shell and their mapping to views.

mod registry;

pub use registry::render_page;

/// Every navigable page. `as_str` is the `?page=` value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PageKey {
    #[default]
    Categories,
    Services,
    Departments,
    Designations,
    Staffs,
    Customers,
    OnCalls,
}

impl PageKey {
    pub const ALL: [PageKey; 7] = [
        PageKey::Categories,
        PageKey::Services,
        PageKey::Departments,
        PageKey::Designations,
        PageKey::Staffs,
        PageKey::Customers,
        PageKey::OnCalls,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PageKey::Categories => "categories",
            PageKey::Services => "services",
            PageKey::Departments => "departments",
            PageKey::Designations => "designations",
            PageKey::Staffs => "staffs",
            PageKey::Customers => "customers",
            PageKey::OnCalls => "on-calls",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            PageKey::Categories => "Categories",
            PageKey::Services => "Services",
            PageKey::Departments => "Departments",
            PageKey::Designations => "Designations",
            PageKey::Staffs => "Staffs",
            PageKey::Customers => "Customers",
            PageKey::OnCalls => "On Calls",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            PageKey::Categories => "layers",
            PageKey::Services => "wrench",
            PageKey::Departments => "building",
            PageKey::Designations => "briefcase",
            PageKey::Staffs => "id-card",
            PageKey::Customers => "users",
            PageKey::OnCalls => "phone",
        }
    }
}
