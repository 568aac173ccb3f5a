use shared::Selection;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::icons::{CalendarIcon, CloseIcon};

#[derive(Properties, PartialEq)]
pub struct DayModalProps {
    pub selection: Selection,
    /// Capitalized month name used in the title, e.g. "Septiembre"
    pub month_name: String,
    pub on_close: Callback<()>,
}

#[function_component(DayModal)]
pub fn day_modal(props: &DayModalProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
        })
    };

    let Some(day) = props.selection.selected() else {
        return html! {};
    };

    html! {
        <div class="day-modal-backdrop" onclick={on_backdrop_click}>
            <div class="day-modal" role="dialog" aria-modal="true" onclick={on_modal_click}>
                <div class="day-modal-header">
                    <button
                        type="button"
                        class="day-modal-close-icon"
                        aria-label="Cerrar"
                        onclick={on_close_click.clone()}
                    >
                        <CloseIcon />
                    </button>
                    <div class="day-modal-title">
                        <CalendarIcon />
                        <h2>{format!("{} de {}", day.number, props.month_name)}</h2>
                    </div>
                </div>

                <div class="day-modal-body">
                    <p class="day-modal-content">{&day.content}</p>

                    <div class="day-modal-footer">
                        <button type="button" class="btn btn-primary" onclick={on_close_click}>
                            {"Cerrar"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
