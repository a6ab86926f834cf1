use leptos::prelude::*;

use super::PageKey;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_service::ui::list::ServiceList;
use crate::domain::a003_department::ui::list::DepartmentList;
use crate::domain::a004_designation::ui::list::DesignationList;
use crate::domain::a005_staff::ui::list::StaffList;
use crate::domain::a006_customer::ui::list::CustomerList;
use crate::domain::a007_on_call::ui::list::OnCallList;

/// The single place mapping a page key to its view
pub fn render_page(key: PageKey) -> AnyView {
    match key {
        PageKey::Categories => view! { <CategoryList /> }.into_any(),
        PageKey::Services => view! { <ServiceList /> }.into_any(),
        PageKey::Departments => view! { <DepartmentList /> }.into_any(),
        PageKey::Designations => view! { <DesignationList /> }.into_any(),
        PageKey::Staffs => view! { <StaffList /> }.into_any(),
        PageKey::Customers => view! { <CustomerList /> }.into_any(),
        PageKey::OnCalls => view! { <OnCallList /> }.into_any(),
    }
}
