use dockyard_common::DockError;

use super::*;
use crate::tree::{Area, Orientation, SerializedArea};
use crate::widget::{Title, CLOSABLE_CLASS, UNKNOWN_KIND};

/// Stand-in for an engine widget.
#[derive(Debug, Clone, PartialEq)]
struct MockWidget {
    id: Option<String>,
    kind: Option<String>,
    title: Title,
}

impl MockWidget {
    fn new(kind: &str, id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            kind: Some(kind.to_string()),
            title: Title {
                label: Some(kind.to_string()),
                icon_class: None,
                class_name: None,
            },
        }
    }

    /// Reconstruct a widget that re-encodes to `config`.
    fn from_config(config: &WidgetConfig) -> Self {
        let class_name = match config.closable {
            Some(true) => Some(format!("tab {CLOSABLE_CLASS}")),
            _ => Some("tab".to_string()),
        };
        Self {
            id: Some(config.id.clone()),
            kind: Some(config.kind.clone()),
            title: Title {
                label: config.label.clone(),
                icon_class: config.icon.clone(),
                class_name,
            },
        }
    }
}

impl LiveWidget for MockWidget {
    fn id(&self) -> Option<String> {
        self.id.clone()
    }

    fn kind(&self) -> Option<String> {
        self.kind.clone()
    }

    fn title(&self) -> Title {
        self.title.clone()
    }
}

fn config(kind: &str, id: &str) -> WidgetConfig {
    WidgetConfig::new(id, kind)
        .with_label(kind)
        .with_closable(false)
}

fn tabs(configs: Vec<WidgetConfig>, current_index: usize) -> SerializedArea {
    Area::tab_area(configs, current_index)
}

fn rebuild(config: &WidgetConfig) -> Result<MockWidget, DockError> {
    Ok(MockWidget::from_config(config))
}

/// Left explorer, right split of editors over a bottom panel.
fn workbench() -> SerializedLayout {
    Layout::new(Area::split(
        Orientation::Horizontal,
        vec![0.2, 0.8],
        vec![
            tabs(vec![config("EXPLORER", "exp-1")], 0),
            Area::split(
                Orientation::Vertical,
                vec![0.7, 0.3],
                vec![
                    Area::split(
                        Orientation::Horizontal,
                        vec![0.5, 0.5],
                        vec![
                            tabs(vec![config("EDITOR", "ed-1"), config("EDITOR", "ed-2")], 1),
                            tabs(vec![config("EDITOR", "ed-3")], 0),
                        ],
                    ),
                    tabs(
                        vec![
                            config("TERMINAL", "term-1"),
                            config("DEBUG", "debug-1"),
                            config("OUTPUT", "output-1"),
                        ],
                        2,
                    ),
                ],
            ),
        ],
    ))
}

#[test]
fn encode_empty_layout() {
    let live: LiveLayout<MockWidget> = Layout::empty();
    let serialized = encode(&live);
    assert!(serialized.main.is_none());
    assert_eq!(
        serde_json::to_string(&serialized).unwrap(),
        r#"{"main":null}"#
    );
}

#[test]
fn decode_empty_layout_never_calls_factory() {
    let mut calls = 0;
    let live = decode(&SerializedLayout::empty(), |c| {
        calls += 1;
        rebuild(c)
    })
    .unwrap();
    assert!(live.is_empty());
    assert_eq!(calls, 0);
}

#[test]
fn encode_simple_tab_area() {
    let live = Layout::new(Area::tab_area(
        vec![
            MockWidget::new("CODE_EDITOR", "widget-1"),
            MockWidget::new("TERMINAL", "widget-2"),
        ],
        1,
    ));
    let serialized = encode(&live);
    match serialized.main {
        Some(Area::TabArea {
            widgets,
            current_index,
        }) => {
            let kinds: Vec<_> = widgets.iter().map(|w| w.kind.as_str()).collect();
            assert_eq!(kinds, vec!["CODE_EDITOR", "TERMINAL"]);
            assert_eq!(widgets[0].id, "widget-1");
            assert_eq!(current_index, 1);
        }
        other => panic!("expected tab-area, got {other:?}"),
    }
}

#[test]
fn encode_records_unknown_kind() {
    let mut widget = MockWidget::new("EDITOR", "w1");
    widget.kind = None;
    let serialized = encode(&Layout::new(Area::tab_area(vec![widget], 0)));
    assert_eq!(serialized.widgets()[0].kind, UNKNOWN_KIND);
}

#[test]
fn factory_called_in_document_order() {
    let mut order = Vec::new();
    decode(&workbench(), |c| {
        order.push(c.kind.clone());
        rebuild(c)
    })
    .unwrap();
    assert_eq!(
        order,
        vec!["EXPLORER", "EDITOR", "EDITOR", "EDITOR", "TERMINAL", "DEBUG", "OUTPUT"]
    );
}

#[test]
fn decode_then_encode_is_identity() {
    let original = workbench();
    let live = decode(&original, rebuild).unwrap();
    assert_eq!(encode(&live), original);
}

#[test]
fn round_trip_keeps_identity_fields() {
    let original = Layout::new(tabs(
        vec![
            WidgetConfig::new("a", "EDITOR")
                .with_label("main.rs")
                .with_icon("rust-icon")
                .with_closable(true),
            WidgetConfig::new("b", "PREVIEW").with_closable(false),
        ],
        0,
    ));
    let live = decode(&original, rebuild).unwrap();
    assert_eq!(encode(&live), original);
}

#[test]
fn factory_error_propagates_and_stops() {
    let mut built = Vec::new();
    let result = decode(&workbench(), |c| {
        if c.kind == "TERMINAL" {
            return Err(DockError::UnknownWidgetKind(c.kind.clone()));
        }
        built.push(c.id.clone());
        rebuild(c)
    });
    assert!(matches!(result, Err(DockError::UnknownWidgetKind(ref k)) if k == "TERMINAL"));
    assert_eq!(built, vec!["exp-1", "ed-1", "ed-2", "ed-3"]);
}

#[test]
fn three_way_split_keeps_sizes_and_children_aligned() {
    let live = Layout::new(Area::split(
        Orientation::Horizontal,
        vec![0.25, 0.5, 0.25],
        vec![
            Area::tab_area(vec![MockWidget::new("LEFT", "left-1")], 0),
            Area::split(
                Orientation::Vertical,
                vec![0.33, 0.34, 0.33],
                vec![
                    Area::tab_area(vec![MockWidget::new("TOP", "top-1")], 0),
                    Area::tab_area(vec![MockWidget::new("MIDDLE", "mid-1")], 0),
                    Area::tab_area(vec![MockWidget::new("BOTTOM", "bot-1")], 0),
                ],
            ),
            Area::tab_area(vec![MockWidget::new("RIGHT", "right-1")], 0),
        ],
    ));

    let serialized = encode(&live);
    let Some(Area::SplitArea {
        sizes, children, ..
    }) = &serialized.main
    else {
        panic!("expected split-area");
    };
    assert_eq!(sizes, &vec![0.25, 0.5, 0.25]);
    assert_eq!(children.len(), 3);
    assert_eq!(sizes.len(), children.len());

    match &children[1] {
        Area::SplitArea {
            orientation,
            sizes,
            children,
        } => {
            assert_eq!(*orientation, Orientation::Vertical);
            assert_eq!(sizes, &vec![0.33, 0.34, 0.33]);
            assert_eq!(children.len(), 3);
        }
        other => panic!("expected nested split-area, got {other:?}"),
    }
    assert!(serialized.shape_issues().is_empty());
}

#[test]
fn wire_format_field_names() {
    let layout = Layout::new(Area::split(
        Orientation::Vertical,
        vec![1.0],
        vec![tabs(vec![WidgetConfig::new("w1", "EDITOR")], 0)],
    ));
    let value = serde_json::to_value(&layout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "main": {
                "type": "split-area",
                "orientation": "vertical",
                "sizes": [1.0],
                "children": [{
                    "type": "tab-area",
                    "widgets": [{ "id": "w1", "kind": "EDITOR" }],
                    "currentIndex": 0
                }]
            }
        })
    );
}

#[test]
fn persisted_json_round_trips() {
    let persisted = r#"{
      "main": {
        "type": "split-area",
        "orientation": "horizontal",
        "sizes": [0.3, 0.7],
        "children": [
          { "type": "tab-area", "widgets": [{ "id": "sb", "kind": "SIDEBAR", "closable": false }], "currentIndex": 0 },
          { "type": "tab-area", "widgets": [
              { "id": "e1", "kind": "CODE_EDITOR", "label": "a.rs", "closable": true },
              { "id": "e2", "kind": "CODE_EDITOR", "label": "b.rs", "icon": "rs", "closable": false }
            ], "currentIndex": 1 }
        ]
      }
    }"#;
    let parsed = json_to_serialized_layout(persisted).unwrap();
    let live = decode(&parsed, rebuild).unwrap();
    let json = layout_to_json(&live).unwrap();
    let reparsed = json_to_serialized_layout(&json).unwrap();
    assert_eq!(reparsed, parsed);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&json).unwrap(),
        serde_json::from_str::<serde_json::Value>(persisted).unwrap()
    );
}

#[test]
fn pretty_json_uses_two_space_indent() {
    let json = serialized_to_json(&workbench()).unwrap();
    assert!(json.starts_with("{\n  \"main\": {"));
}

#[test]
fn malformed_json_is_an_error() {
    let err = json_to_serialized_layout(r#"{"main":{"type":"grid-area"}}"#).unwrap_err();
    assert!(matches!(err, DockError::Json(_)));
}

#[test]
fn counts() {
    let layout = workbench();
    assert_eq!(count_splits(&layout), 3);
    assert_eq!(count_panels(&layout), 4);
    assert_eq!(count_widgets(&layout), 7);
    assert_eq!(count_splits(&SerializedLayout::empty()), 0);
}
