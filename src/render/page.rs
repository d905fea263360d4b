use crate::error::DashResult;

use super::layout::PageLayout;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>__TITLE__</title>
<script src="__PLOTLY__"></script>
<style>
  body { font-family: "Open Sans", Verdana, Arial, sans-serif; margin: 0 2em; }
  .range-slider { position: relative; width: 100%; margin: 0 auto; }
  .range-slider input[type=range] { width: 100%; }
  .range-marks { display: flex; justify-content: space-between; font-size: 12px; color: #666; }
  .range-value { text-align: center; font-size: 14px; }
</style>
</head>
<body>
<div id="app"></div>
<script id="page-layout" type="application/json">__LAYOUT__</script>
<script>
(function () {
  "use strict";
  const layout = JSON.parse(document.getElementById("page-layout").textContent);
  const state = {};
  const app = document.getElementById("app");

  function applyStyle(node, style) {
    for (const [key, value] of Object.entries(style || {})) {
      node.style.setProperty(key.replace(/[A-Z]/g, (c) => "-" + c.toLowerCase()), value);
    }
  }

  function emit(id, value) {
    state[id] = value;
    for (const callback of layout.callbacks) {
      if (callback.inputs.some((input) => input.id === id)) {
        refresh(callback);
      }
    }
  }

  function buildDropdown(spec) {
    const wrapper = document.createElement("div");
    const select = document.createElement("select");
    select.id = spec.id;
    applyStyle(select, spec.style);
    const placeholder = document.createElement("option");
    placeholder.value = "";
    placeholder.textContent = spec.placeholder;
    placeholder.disabled = true;
    select.appendChild(placeholder);
    for (const option of spec.options) {
      const node = document.createElement("option");
      node.value = option.value;
      node.textContent = option.label;
      select.appendChild(node);
    }
    select.value = spec.value;
    state[spec.id] = spec.value;
    if (spec.searchable) {
      const search = document.createElement("input");
      search.type = "search";
      search.placeholder = spec.placeholder;
      search.style.width = "100%";
      search.addEventListener("input", () => {
        const needle = search.value.toLowerCase();
        for (const node of select.options) {
          if (node.value !== "") {
            node.hidden = needle !== "" && !node.textContent.toLowerCase().includes(needle);
          }
        }
      });
      wrapper.appendChild(search);
    }
    select.addEventListener("change", () => emit(spec.id, select.value));
    wrapper.appendChild(select);
    return wrapper;
  }

  function buildRangeSlider(spec) {
    const wrapper = document.createElement("div");
    wrapper.className = "range-slider";
    wrapper.id = spec.id;
    const low = document.createElement("input");
    const high = document.createElement("input");
    for (const handle of [low, high]) {
      handle.type = "range";
      handle.min = spec.min;
      handle.max = spec.max;
      handle.step = spec.step;
      wrapper.appendChild(handle);
    }
    low.value = spec.value[0];
    high.value = spec.value[1];
    state[spec.id] = spec.value.slice();
    const readout = document.createElement("div");
    readout.className = "range-value";
    const show = () => { readout.textContent = state[spec.id][0] + " - " + state[spec.id][1]; };
    const onChange = () => {
      const a = Number(low.value);
      const b = Number(high.value);
      emit(spec.id, [Math.min(a, b), Math.max(a, b)]);
      show();
    };
    low.addEventListener("change", onChange);
    high.addEventListener("change", onChange);
    const marks = document.createElement("div");
    marks.className = "range-marks";
    for (const label of Object.values(spec.marks)) {
      const mark = document.createElement("span");
      mark.textContent = label;
      marks.appendChild(mark);
    }
    wrapper.appendChild(marks);
    wrapper.appendChild(readout);
    show();
    return wrapper;
  }

  function build(spec) {
    switch (spec.component) {
      case "container": {
        const node = document.createElement("div");
        applyStyle(node, spec.style);
        spec.children.forEach((child) => node.appendChild(build(child)));
        return node;
      }
      case "heading": {
        const node = document.createElement("h1");
        node.textContent = spec.text;
        applyStyle(node, spec.style);
        return node;
      }
      case "paragraph": {
        const node = document.createElement("p");
        node.textContent = spec.text;
        applyStyle(node, spec.style);
        return node;
      }
      case "line_break":
        return document.createElement("br");
      case "dropdown":
        return buildDropdown(spec);
      case "range_slider":
        return buildRangeSlider(spec);
      case "graph": {
        const node = document.createElement("div");
        node.id = spec.id;
        return node;
      }
      default:
        return document.createComment("unknown component " + spec.component);
    }
  }

  const pending = {};

  async function refresh(callback) {
    const params = new URLSearchParams();
    for (const input of callback.inputs) {
      const value = state[input.id];
      if (Array.isArray(value)) {
        params.set("low", value[0]);
        params.set("high", value[1]);
      } else if (value !== undefined) {
        params.set("site", value);
      }
    }
    const ticket = (pending[callback.output.id] || 0) + 1;
    pending[callback.output.id] = ticket;
    const response = await fetch(callback.endpoint + "?" + params.toString());
    if (!response.ok || pending[callback.output.id] !== ticket) {
      return;
    }
    const figure = await response.json();
    Plotly.react(callback.output.id, figure.data, figure.layout);
  }

  app.appendChild(build(layout.root));
  layout.callbacks.forEach(refresh);
})();
</script>
</body>
</html>
"#;

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Renders the dashboard page with `layout` embedded as JSON.
///
/// The browser script builds the controls from the embedded layout and
/// re-fetches a callback endpoint whenever one of its inputs changes.
pub fn render_page(layout: &PageLayout) -> DashResult<String> {
    // `</` would close the script element early.
    let layout_json = serde_json::to_string(layout)?.replace("</", "<\\/");
    Ok(PAGE_TEMPLATE
        .replace("__TITLE__", &escape_html(&layout.title))
        .replace("__PLOTLY__", PLOTLY_CDN)
        .replace("__LAYOUT__", &layout_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_html_covers_markup_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }
}
