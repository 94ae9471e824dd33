use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TimeDisplayProps {
    pub text: AttrValue,
}

#[function_component(TimeDisplay)]
pub fn time_display(props: &TimeDisplayProps) -> Html {
    html! {<div id="stopwatch-display" style="font-size:28px; font-weight:600; font-variant-numeric:tabular-nums;">{ props.text.clone() }</div>}
}
