//! Bottom and left chart axes drawn from precomputed ticks.

use dioxus::prelude::*;
use hdi_charts::frame::ChartFrame;
use hdi_charts::scale::Tick;

const TICK_SIZE: f64 = 6.0;
const AXIS_COLOR: &str = "#000";

/// Horizontal axis along the bottom margin, title at the right end.
#[component]
pub fn BottomAxis(frame: ChartFrame, ticks: Vec<Tick>, title: String) -> Element {
    let y = frame.height - frame.margin.bottom;
    let (x0, x1) = frame.x_range();

    rsx! {
        g {
            class: "x-axis",
            line { x1: x0, x2: x1, y1: y, y2: y, stroke: AXIS_COLOR }
            for tick in ticks {
                g {
                    key: "{tick.value}",
                    line {
                        x1: tick.position,
                        x2: tick.position,
                        y1: y,
                        y2: y + TICK_SIZE,
                        stroke: AXIS_COLOR,
                    }
                    text {
                        x: tick.position,
                        y: y + TICK_SIZE + 12.0,
                        text_anchor: "middle",
                        font_size: "10",
                        "{tick.label}"
                    }
                }
            }
            text {
                x: x1,
                y: y + 30.0,
                text_anchor: "end",
                font_size: "12",
                "{title}"
            }
        }
    }
}

/// Vertical axis along the left margin with a rotated title.
#[component]
pub fn LeftAxis(frame: ChartFrame, ticks: Vec<Tick>, title: String) -> Element {
    let x = frame.margin.left;
    let (y0, y1) = frame.y_range();

    rsx! {
        g {
            class: "y-axis",
            line { x1: x, x2: x, y1: y0, y2: y1, stroke: AXIS_COLOR }
            for tick in ticks {
                g {
                    key: "{tick.value}",
                    line {
                        x1: x - TICK_SIZE,
                        x2: x,
                        y1: tick.position,
                        y2: tick.position,
                        stroke: AXIS_COLOR,
                    }
                    text {
                        x: x - TICK_SIZE - 3.0,
                        y: tick.position,
                        dy: "0.32em",
                        text_anchor: "end",
                        font_size: "10",
                        "{tick.label}"
                    }
                }
            }
            text {
                transform: "rotate(-90)",
                x: -frame.margin.top,
                y: x - 30.0,
                text_anchor: "end",
                font_size: "12",
                "{title}"
            }
        }
    }
}
