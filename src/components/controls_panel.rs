use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub label: AttrValue,
    pub running: bool,
    pub on_toggle: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let toggle_cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let class = if props.running { "stop" } else { "start" };
    html! {<div style="display:flex; gap:6px;">
        <button id="stopwatch-toggle" {class} onclick={toggle_cb} style="padding:4px 10px; font-size:12px;">{ props.label.clone() }</button>
    </div>}
}
