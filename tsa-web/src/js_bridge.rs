//! Typed wrappers around the Chart.js and DataTables globals.
//!
//! Both libraries are loaded by `<script>` tags in the host page and found
//! on the global object at call time. Configurations are serialized with
//! `serde_json` and parsed into plain JS objects before the call. Failures
//! (library missing, bad config) are logged and otherwise ignored.

use js_sys::{Array, Function, Reflect, JSON};
use log::warn;
use serde::Serialize;
use tsa_core::chart::{ChartConfig, ChartRenderer};
use tsa_core::table::{TableOptions, TableRenderer};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

/// Look up a global, failing if it is not defined.
fn global(name: &str) -> Result<JsValue, JsValue> {
    let value = Reflect::get(&js_sys::global(), &JsValue::from_str(name))?;
    if value.is_undefined() {
        return Err(JsValue::from_str(&format!("{} is not loaded", name)));
    }
    Ok(value)
}

/// Convert a serializable config into a plain JS object.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let json = serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    JSON::parse(&json)
}

/// Chart.js, drawing into `<canvas>` elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartJs;

impl ChartJs {
    fn draw(canvas: &HtmlCanvasElement, config: &ChartConfig) -> Result<(), JsValue> {
        let chart: Function = global("Chart")?.dyn_into()?;

        // A canvas can only hold one chart; drop the previous one first.
        let get_chart = Reflect::get(&chart, &JsValue::from_str("getChart"))?;
        if let Some(get_chart) = get_chart.dyn_ref::<Function>() {
            let existing = get_chart.call1(&chart, canvas)?;
            if !existing.is_undefined() && !existing.is_null() {
                let destroy: Function =
                    Reflect::get(&existing, &JsValue::from_str("destroy"))?.dyn_into()?;
                destroy.call0(&existing)?;
            }
        }

        let args = Array::of2(canvas, &to_js(config)?);
        Reflect::construct(&chart, &args)?;
        Ok(())
    }
}

impl ChartRenderer for ChartJs {
    type Surface = HtmlCanvasElement;

    fn render(&self, surface: &HtmlCanvasElement, config: &ChartConfig) {
        if let Err(e) = Self::draw(surface, config) {
            warn!("Chart.js render into #{} failed: {:?}", surface.id(), e);
        }
    }
}

/// DataTables through the jQuery plugin interface.
#[derive(Debug, Clone, Copy, Default)]
pub struct DataTables;

impl DataTables {
    fn apply(element_id: &str, options: &TableOptions) -> Result<(), JsValue> {
        let jquery: Function = global("jQuery")?.dyn_into()?;
        let selected = jquery.call1(&JsValue::NULL, &JsValue::from_str(&format!("#{}", element_id)))?;
        let data_table: Function =
            Reflect::get(&selected, &JsValue::from_str("DataTable"))?.dyn_into()?;
        data_table.call1(&selected, &to_js(options)?)?;
        Ok(())
    }
}

impl TableRenderer for DataTables {
    fn enhance(&self, element_id: &str, options: &TableOptions) {
        if let Err(e) = Self::apply(element_id, options) {
            warn!("DataTables init on #{} failed: {:?}", element_id, e);
        }
    }
}
