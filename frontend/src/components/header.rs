use chrono::NaiveDateTime;
use yew::prelude::*;

use super::icons::CalendarIcon;
use crate::services::date_utils::format_current_date;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub title: String,
    pub now: NaiveDateTime,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="header">
            <div class="header-title">
                <CalendarIcon class="header-icon" />
                <h1>{&props.title}</h1>
            </div>
            <p class="header-subtitle">{"Para mi amada Melanie Lisette"}</p>
            <p class="header-subtitle">
                {"Descubre cada día del mes. Los días disponibles se desbloquean progresivamente."}
            </p>
            <div class="header-date">
                {format!("Fecha actual: {}", format_current_date(props.now))}
            </div>
        </header>
    }
}
