use shared::{locale, AdventCalendar, CalendarConfig, ConfigError, ContentBook};
use yew::prelude::*;

mod components;
mod hooks;
mod services;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_utils;

use components::{calendar::Calendar, day_modal::DayModal, header::Header, legend::Legend};
use hooks::use_calendar::use_calendar;
use services::logging::Logger;

/// Calendar shape baked into the page, validated once at startup
fn load_calendar() -> Result<AdventCalendar, ConfigError> {
    AdventCalendar::new(CalendarConfig::default(), ContentBook::default())
}

#[derive(Properties, PartialEq)]
struct CalendarPageProps {
    calendar: AdventCalendar,
}

#[function_component(CalendarPage)]
fn calendar_page(props: &CalendarPageProps) -> Html {
    let calendar = &props.calendar;
    let calendar_hook = use_calendar(calendar);
    let state = &calendar_hook.state;
    let actions = &calendar_hook.actions;

    html! {
        <>
            <div class="container">
                <Header title={calendar.title()} now={state.now} />

                <Calendar
                    days={state.days.clone()}
                    month_label={calendar.short_month_label()}
                    on_day_click={actions.on_day_click.clone()}
                />

                <Legend />
            </div>

            <DayModal
                selection={state.selection.clone()}
                month_name={locale::capitalized_month_es(calendar.config().month)}
                on_close={actions.on_close.clone()}
            />
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    let calendar = use_memo((), |_| load_calendar());

    let page = match &*calendar {
        Ok(calendar) => html! { <CalendarPage calendar={calendar.clone()} /> },
        Err(e) => {
            Logger::error_with_component("app", &format!("Invalid calendar config: {}", e));
            html! {
                <div class="container load-error">
                    {"No se pudo cargar el calendario."}
                </div>
            }
        }
    };

    html! { <div class="app">{page}</div> }
}

fn main() {
    if let Err(e) = Logger::init() {
        Logger::warn_with_component("app", &format!("Logger already installed: {}", e));
    }
    Logger::info_with_component("app", "🎁 Starting advent calendar");
    yew::Renderer::<App>::new().render();
}
