use yew::prelude::*;

#[function_component(Legend)]
pub fn legend() -> Html {
    html! {
        <div class="legend">
            <div class="legend-item">
                <div class="legend-swatch tone-rose-300"></div>
                <span class="legend-text available">{"Días disponibles"}</span>
            </div>
            <div class="legend-item">
                <div class="legend-swatch locked"></div>
                <span class="legend-text unavailable">{"Días bloqueados"}</span>
            </div>
        </div>
    }
}
