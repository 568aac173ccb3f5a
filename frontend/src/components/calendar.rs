use shared::{cell_style, Day};
use web_sys::MouseEvent;
use yew::prelude::*;

use super::icons::LockIcon;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub days: Vec<Day>,
    pub month_label: String,
    pub on_day_click: Callback<Day>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    html! {
        <div class="calendar-grid">
            {for props.days.iter().enumerate().map(|(index, day)| html! {
                <DayCell
                    key={day.number}
                    day={day.clone()}
                    index={index}
                    month_label={props.month_label.clone()}
                    on_click={props.on_day_click.clone()}
                />
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DayCellProps {
    pub day: Day,
    /// Grid position, drives the colour cycle
    pub index: usize,
    pub month_label: String,
    pub on_click: Callback<Day>,
}

#[function_component(DayCell)]
pub fn day_cell(props: &DayCellProps) -> Html {
    let day = &props.day;
    let style = cell_style(day, props.index);

    let onclick = {
        let day = day.clone();
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| {
            on_click.emit(day.clone());
        })
    };

    let state_class = if day.is_available { "available" } else { "unavailable" };

    html! {
        <div
            class={classes!("calendar-day", state_class, style.css_class())}
            onclick={onclick}
            aria-disabled={(!day.is_available).to_string()}
        >
            <div class="day-number">{day.number}</div>
            <div class="day-label">{&props.month_label}</div>

            {if day.is_available {
                html! { <div class="available-dot"></div> }
            } else {
                html! {
                    <div class="lock-overlay">
                        <LockIcon class="lock-icon" />
                    </div>
                }
            }}
        </div>
    }
}
