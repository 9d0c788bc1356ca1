use plotly::common::Mode;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use workflow::ChartSeries;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

const CHART_DIV_ID: &str = "prediction-history-chart";

#[derive(Properties, PartialEq)]
pub struct Props {
    pub series: ChartSeries,
}

#[function_component(HistoryChart)]
pub fn history_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();
    let series = props.series.clone();

    use_effect_with((container_ref.clone(), series), move |(container_ref, series)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_DIV_ID);

            // Years render as categories so entries stay in submission
            // order, repeats included.
            let labels: Vec<String> = series.labels.iter().map(|year| year.to_string()).collect();

            let trace = Scatter::new(labels, series.values.clone())
                .mode(Mode::LinesMarkers)
                .name("Predicted Prices")
                .line(plotly::common::Line::new().color("rgb(109, 40, 217)").width(2.0));

            let layout = Layout::new()
                .title(plotly::common::Title::with_text("Prediction History"))
                .x_axis(plotly::layout::Axis::new().title(plotly::common::Title::with_text("Year")))
                .y_axis(
                    plotly::layout::Axis::new()
                        .title(plotly::common::Title::with_text("Predicted Price")),
                )
                .height(360);

            // Serialize through JSON and hand plain JS objects to Plotly.
            let trace_json = serde_json::to_string(&trace).unwrap();
            let trace_js = js_sys::JSON::parse(&trace_json).unwrap();

            let data_js = js_sys::Array::new();
            data_js.push(&trace_js);

            let layout_json = serde_json::to_string(&layout).unwrap();
            let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

            newPlot(CHART_DIV_ID, data_js.into(), layout_js);
        }
        || ()
    });

    html! {
        <div ref={container_ref} style="width:100%; height:360px;"></div>
    }
}
