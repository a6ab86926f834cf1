//! Sidebar with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::pages::PageKey;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// Empty for a group that is itself a page
    items: Vec<PageKey>,
    page: Option<PageKey>,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "services",
            label: "Services",
            icon: "wrench",
            items: vec![PageKey::Categories, PageKey::Services],
            page: None,
        },
        MenuGroup {
            id: "workforce",
            label: "Workforce",
            icon: "building",
            items: vec![PageKey::Departments, PageKey::Designations, PageKey::Staffs],
            page: None,
        },
        MenuGroup {
            id: "customers",
            label: PageKey::Customers.label(),
            icon: PageKey::Customers.icon(),
            items: vec![],
            page: Some(PageKey::Customers),
        },
        MenuGroup {
            id: "on-calls",
            label: PageKey::OnCalls.label(),
            icon: PageKey::OnCalls.icon(),
            items: vec![],
            page: Some(PageKey::OnCalls),
        },
    ]
}

/// Group holding `key`, so it starts expanded
fn group_of(key: PageKey) -> Option<&'static str> {
    menu_groups()
        .into_iter()
        .find(|g| g.items.contains(&key))
        .map(|g| g.id)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups: RwSignal<Vec<&'static str>> = RwSignal::new(
        group_of(ctx.active.get_untracked()).into_iter().collect(),
    );

    view! {
        <div class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                let gid = group.id;
                let has_children = !group.items.is_empty();
                let page = group.page;

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || {
                                page.map(|p| ctx.active.get() == p).unwrap_or(false)
                            }
                            on:click=move |_| {
                                if let Some(page) = page {
                                    ctx.open_page(page);
                                } else {
                                    expanded_groups.update(|items| {
                                        if let Some(pos) = items.iter().position(|x| *x == gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                }
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            {has_children.then(|| view! {
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&gid)
                                >
                                    {icon("chevron-right")}
                                </div>
                            })}
                        </div>

                        {has_children.then(|| {
                            let items = StoredValue::new(group.items.clone());
                            view! {
                                <Show when=move || expanded_groups.get().contains(&gid)>
                                    <div class="app-sidebar__children">
                                        {items.get_value().into_iter().map(|key| view! {
                                            <div
                                                class="app-sidebar__item app-sidebar__item--child"
                                                class:app-sidebar__item--active=move || ctx.active.get() == key
                                                on:click=move |_| ctx.open_page(key)
                                            >
                                                <div class="app-sidebar__item-content">
                                                    {icon(key.icon())}
                                                    <span>{key.label()}</span>
                                                </div>
                                            </div>
                                        }).collect_view()}
                                    </div>
                                </Show>
                            }
                        })}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_is_reachable_once() {
        let mut reachable: Vec<PageKey> = menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().chain(g.page))
            .collect();
        reachable.sort_by_key(|k| k.as_str());
        let mut all = PageKey::ALL.to_vec();
        all.sort_by_key(|k| k.as_str());
        assert_eq!(reachable, all);
    }

    #[test]
    fn test_group_of() {
        assert_eq!(group_of(PageKey::Staffs), Some("workforce"));
        assert_eq!(group_of(PageKey::Customers), None);
    }
}
