use crate::shared::icons::icon;
use contracts::domain::common::StatCard as StatCardData;
use leptos::prelude::*;

fn format_count(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    #[prop(into)] value: Signal<u64>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || format_count(value.get())}</div>
            </div>
        </div>
    }
}

/// One card per counter, always taken from the latest applied response
#[component]
pub fn StatCardRow(#[prop(into)] cards: Signal<Vec<StatCardData>>) -> impl IntoView {
    view! {
        <div class="stat-card-row">
            <For
                each=move || cards.get().into_iter().enumerate()
                key=|(index, card)| (*index, card.title.clone())
                children=move |(index, card)| {
                    let value = Signal::derive(move || {
                        cards.with(|all| all.get(index).map(|c| c.value).unwrap_or_default())
                    });
                    view! { <StatCard label=card.title icon_name=card.icon value=value /> }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12_345), "12,345");
    }
}
