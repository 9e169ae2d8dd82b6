//! Stylesheet for the settings panel.

pub const STYLESHEET: &str = r"
body {
    margin: 0;
    font-family: system-ui, -apple-system, sans-serif;
    font-size: 14px;
    background: #f7f7f9;
    color: #2f2936;
}

.app-container { max-width: 960px; margin: 0 auto; padding: 24px; }
.app-status { padding: 24px; color: #6b6474; }
.alert-settings { display: flex; flex-direction: column; }
.app-error { padding: 16px; border: 1px solid #f5c2c7; background: #fdf1f2; color: #a02a36; border-radius: 6px; }

.panel-header { display: flex; justify-content: space-between; align-items: center; }
.panel-header h2 { margin: 0; }

.nav-tabs { display: flex; gap: 16px; list-style: none; padding: 0; margin: 16px 0; border-bottom: 1px solid #ddd; }
.nav-tabs li { padding: 8px 0; }
.nav-tabs li.active { border-bottom: 2px solid #6c5fc7; font-weight: 600; }
.nav-tabs a { color: inherit; text-decoration: none; }

.btn { display: inline-block; padding: 6px 12px; border-radius: 4px; border: 1px solid #c9c2d3; background: #fff; color: #2f2936; cursor: pointer; text-decoration: none; }
.btn-primary { background: #6c5fc7; border-color: #5b4fb3; color: #fff; }
.btn-sm { padding: 4px 8px; font-size: 12px; }
.btn[disabled] { opacity: 0.5; cursor: default; }

.box { background: #fff; border: 1px solid #e2dee6; border-radius: 6px; margin-bottom: 20px; }
.box-header { display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; border-bottom: 1px solid #e2dee6; }
.box-header h3 { margin: 0; font-size: 16px; }
.box-actions { display: flex; gap: 8px; }
.box-content { padding: 16px; }

.alert-error { padding: 10px 12px; margin-bottom: 12px; border-radius: 4px; background: #fdf1f2; color: #a02a36; }

.range-row { display: grid; grid-template-columns: 1fr 1fr; gap: 24px; }
.range-field label { display: block; font-weight: 600; margin-bottom: 6px; }
.range-field input { width: 100%; }
.range-value { font-variant-numeric: tabular-nums; }
.range-help { color: #6b6474; font-size: 12px; }
.range-error { color: #a02a36; font-size: 12px; margin-top: 4px; }

.form-actions { display: flex; justify-content: flex-end; margin-top: 16px; }

.integration-list { display: flex; flex-wrap: wrap; gap: 8px; list-style: none; padding: 0; margin: 0; }

.plugin-default p { margin-top: 0; }
.plugin-meta { display: flex; gap: 12px; color: #6b6474; font-size: 12px; }

.plugin-id { font-family: ui-monospace, monospace; }
.plugin-scope { font-style: italic; }

.indicators { position: fixed; bottom: 16px; right: 16px; display: flex; flex-direction: column; gap: 8px; }
.indicator { padding: 8px 14px; border-radius: 4px; background: #2f2936; color: #fff; box-shadow: 0 2px 6px #0003; }
.indicator-error { background: #a02a36; }
";
