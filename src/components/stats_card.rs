//! Single-number statistic card for the dashboards.

use leptos::prelude::*;

/// Emphasis applied to the value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatTone {
    #[default]
    Plain,
    Warn,
    Danger,
}

#[component]
pub fn StatsCard(
    label: &'static str,
    value: String,
    subtitle: String,
    #[prop(optional)] tone: StatTone,
) -> impl IntoView {
    let value_class = match tone {
        StatTone::Plain => "stats-card__value",
        StatTone::Warn => "stats-card__value stats-card__value--warn",
        StatTone::Danger => "stats-card__value stats-card__value--danger",
    };

    view! {
        <div class="stats-card">
            <p class="stats-card__label">{label}</p>
            <p class=value_class>{value}</p>
            <p class="stats-card__subtitle">{subtitle}</p>
        </div>
    }
}
