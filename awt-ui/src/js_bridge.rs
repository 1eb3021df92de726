//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet map and the D3 history chart live in `assets/js/*.js`. They are
//! evaluated as globals (no ES modules) once both libraries have loaded, and
//! exposed on `window.*`. Data is passed as JSON, which is inlined as a JS
//! object literal rather than a quoted string.

use log::warn;
use wasm_bindgen::JsValue;

static LOCATION_MAP_JS: &str = include_str!("../assets/js/location-map.js");
static HISTORY_CHART_JS: &str = include_str!("../assets/js/history-chart.js");

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('AWT JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        warn!("JS call failed: {}", describe(&e));
    }
}

/// Load the map and chart scripts once Leaflet and D3 are available.
///
/// The scripts are evaluated at global scope through an indirect eval inside
/// the polling callback, then their entry points are promoted to `window`.
/// Call once at app startup.
pub fn init_scripts() {
    let all_js = [LOCATION_MAP_JS, HISTORY_CHART_JS].join("\n");
    let store_js = match serde_json::to_string(&all_js) {
        Ok(js) => format!("window.__awtScripts = {};", js),
        Err(e) => {
            warn!("Could not embed map scripts: {}", e);
            return;
        }
    };
    if let Err(e) = js_sys::eval(&store_js) {
        warn!("Could not store map scripts: {}", describe(&e));
        return;
    }

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof L !== 'undefined' && typeof d3 !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__awtScripts);
                    delete window.__awtScripts;
                    if (typeof renderLocationMap !== 'undefined') window.renderLocationMap = renderLocationMap;
                    if (typeof destroyLocationMap !== 'undefined') window.destroyLocationMap = destroyLocationMap;
                    if (typeof renderHistoryChart !== 'undefined') window.renderHistoryChart = renderHistoryChart;
                    window.__awtScriptsReady = true;
                    console.log('AWT map and charts initialized');
                }
            }, 100);
        })();
    "#;
    if let Err(e) = js_sys::eval(init_js) {
        warn!("Could not start script loader: {}", describe(&e));
    }
}

/// Poll until the scripts are ready and the container exists, then call
/// `window.{function}('{container_id}', {args})`.
fn call_when_ready(function: &str, container_id: &str, args: &str) {
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__awtScriptsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', {args});
                    }} catch(e) {{ console.error('[AWT] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Draw the location shapes on the Leaflet map in `container_id`.
///
/// The map itself is created on the first call and reused afterwards; only
/// the polygon layer is replaced.
pub fn render_location_map(container_id: &str, shapes_json: &str, options_json: &str) {
    call_when_ready(
        "renderLocationMap",
        container_id,
        &format!("{}, {}", shapes_json, options_json),
    );
}

/// Draw a multi-line history chart.
pub fn render_history_chart(container_id: &str, series_json: &str) {
    call_when_ready("renderHistoryChart", container_id, series_json);
}

/// Tear down the Leaflet map bound to `container_id`, if any.
pub fn destroy_location_map(container_id: &str) {
    call_js(&format!(
        "if (window.destroyLocationMap) window.destroyLocationMap('{}');",
        container_id
    ));
}

/// Empty a chart container.
pub fn clear_container(container_id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
    {
        el.set_inner_html("");
    }
}
