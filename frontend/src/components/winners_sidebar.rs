use spinwheel_shared::ScoreRecord;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct WinnersSidebarProps {
    /// Already ordered by descending points.
    pub records: Vec<ScoreRecord>,
}

#[function_component(WinnersSidebar)]
pub fn winners_sidebar(props: &WinnersSidebarProps) -> Html {
    html! {
        <aside class={styles::SIDEBAR}>
            <div class="text-lg font-bold mb-5 text-gray-900 dark:text-white">{"🏆 Score Central"}</div>
            {if props.records.is_empty() {
                html! { <div class={styles::TEXT_SMALL}>{"No winners yet"}</div> }
            } else {
                props.records.iter().enumerate().map(|(index, record)| {
                    let (badge, border) = match index {
                        0 => ("🥇 ", "border-yellow-400"),
                        1 => ("🥈 ", "border-gray-400"),
                        2 => ("🥉 ", "border-amber-600"),
                        _ => ("", "border-blue-500"),
                    };
                    html! {
                        <div key={record.name.clone()} class={classes!(
                            "p-3", "mb-2", "bg-white", "dark:bg-gray-900", "rounded-lg", "shadow-sm", "border-l-4",
                            border
                        )}>
                            <div class="font-semibold text-gray-900 dark:text-white">
                                {badge}{&record.name}
                            </div>
                            <div class="text-xs text-gray-600 dark:text-gray-400 mt-1">
                                {record.wins_label()}{" • "}<strong>{format!("{} pts", record.points)}</strong>
                            </div>
                        </div>
                    }
                }).collect::<Html>()
            }}
        </aside>
    }
}
