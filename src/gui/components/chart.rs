// src/gui/components/chart.rs
//
// Paints a `ChartSpec` with the egui painter. Hovering a bar/point/stack shows
// its label and hover values.

use std::f32::consts::FRAC_PI_4;

use eframe::egui::{
    self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2, epaint::TextShape, pos2, vec2,
};

use crate::gui::logos::LogoCache;
use crate::viz::charts::{Bar, ChartData, ChartSpec, Point, Series};

const HEIGHT: f32 = 380.0;
const LOGO: f32 = 28.0;
const AXIS_FONT: f32 = 11.0;

fn rgb(c: [u8; 3]) -> Color32 {
    Color32::from_rgb(c[0], c[1], c[2])
}

/// (min, max) of `vals`, padded by `pad` of the span; never zero-width.
fn padded_range(vals: impl Iterator<Item = f64>, pad: f64) -> (f64, f64) {
    let (lo, hi) = vals.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() {
        return (0.0, 1.0);
    }
    if hi - lo < 1e-9 {
        return (lo - 0.5, hi + 0.5);
    }
    let span = hi - lo;
    (lo - span * pad, hi + span * pad)
}

fn lerp(v: f64, (lo, hi): (f64, f64), a: f32, b: f32) -> f32 {
    let t = ((v - lo) / (hi - lo)) as f32;
    a + (b - a) * t
}

fn fmt_tick(v: f64) -> String {
    if v.abs() >= 100.0 { format!("{v:.0}") } else if v.abs() >= 1.0 { format!("{v:.1}") } else { format!("{v:.2}") }
}

pub fn draw(ui: &mut egui::Ui, spec: &ChartSpec, logos: &mut LogoCache) {
    ui.label(egui::RichText::new(&spec.title).strong());
    if spec.is_empty() {
        ui.label("No data to plot.");
        return;
    }

    let size = vec2(ui.available_width().max(320.0), HEIGHT);
    let (resp, painter) = ui.allocate_painter(size, Sense::hover());
    let full = resp.rect;
    let text_color = ui.visuals().text_color();
    let grid = ui.visuals().weak_text_color().gamma_multiply(0.4);

    let left = match spec.data {
        ChartData::Bars { .. } => 150.0,
        _ => 56.0,
    };
    let bottom = match spec.data {
        ChartData::Stacked { .. } => 110.0,
        _ => 40.0,
    };
    let plot = Rect::from_min_max(full.min + vec2(left, 8.0), full.max - vec2(16.0, bottom));
    painter.rect_stroke(plot, 0.0, Stroke::new(1.0, grid), StrokeKind::Inside);

    let hover_pos = resp.hover_pos();
    let mut hovered: Option<(String, Vec<(String, String)>)> = None;

    match &spec.data {
        ChartData::Bars { bars, scale } => {
            let xr = padded_range(bars.iter().map(|b| b.value).chain([0.0]), 0.05);
            let (vlo, vhi) = padded_range(bars.iter().map(|b| b.value), 0.0);
            let row_h = plot.height() / bars.len() as f32;
            let x0 = lerp(0.0, xr, plot.left(), plot.right());

            x_ticks(&painter, plot, xr, text_color, grid);
            for (i, Bar { label, value, hover }) in bars.iter().enumerate() {
                let y = plot.top() + row_h * i as f32;
                let x1 = lerp(*value, xr, plot.left(), plot.right());
                let rect = Rect::from_min_max(pos2(x0.min(x1), y + row_h * 0.15), pos2(x0.max(x1), y + row_h * 0.85));
                let t = (*value - vlo) / (vhi - vlo);
                painter.rect_filled(rect, 2.0, rgb(scale.sample(t)));
                painter.text(
                    pos2(plot.left() - 6.0, y + row_h * 0.5),
                    Align2::RIGHT_CENTER,
                    label,
                    FontId::proportional(AXIS_FONT),
                    text_color,
                );
                let band = Rect::from_min_max(pos2(plot.left(), y), pos2(plot.right(), y + row_h));
                if hover_pos.is_some_and(|p| band.contains(p)) {
                    let mut h = vec![(spec.x_label.clone(), fmt_tick(*value))];
                    h.extend(hover.iter().cloned());
                    hovered = Some((label.clone(), h));
                }
            }
        }

        ChartData::Scatter { points } => {
            let xr = padded_range(points.iter().map(|p| p.x), 0.08);
            let yr = padded_range(points.iter().map(|p| p.y), 0.08);
            x_ticks(&painter, plot, xr, text_color, grid);
            y_ticks(&painter, plot, yr, text_color, grid);

            for Point { label, x, y, hover } in points {
                let pos = pos2(
                    lerp(*x, xr, plot.left(), plot.right()),
                    lerp(*y, yr, plot.bottom(), plot.top()),
                );
                match logos.get(ui.ctx(), label) {
                    Some(tex) => {
                        let r = Rect::from_center_size(pos, Vec2::splat(LOGO));
                        let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                        painter.image(tex.id(), r, uv, Color32::WHITE);
                    }
                    None => {
                        painter.circle_filled(pos, 5.0, rgb([0x1f, 0x77, 0xb4]));
                        painter.text(
                            pos + vec2(7.0, -7.0),
                            Align2::LEFT_BOTTOM,
                            label,
                            FontId::proportional(AXIS_FONT),
                            text_color,
                        );
                    }
                }
                if hover_pos.is_some_and(|p| p.distance(pos) <= LOGO * 0.5) {
                    let mut h = vec![
                        (spec.x_label.clone(), fmt_tick(*x)),
                        (spec.y_label.clone(), fmt_tick(*y)),
                    ];
                    h.extend(hover.iter().cloned());
                    hovered = Some((label.clone(), h));
                }
            }
        }

        ChartData::Stacked { categories, series } => {
            let totals: Vec<f64> = (0..categories.len())
                .map(|i| series.iter().map(|s| s.values[i]).sum())
                .collect();
            let yr = (0.0, totals.iter().copied().fold(0.0, f64::max).max(1e-9) * 1.05);
            y_ticks(&painter, plot, yr, text_color, grid);

            let col_w = plot.width() / categories.len() as f32;
            for (i, cat) in categories.iter().enumerate() {
                let x = plot.left() + col_w * i as f32;
                let mut acc = 0.0;
                for Series { color, values, .. } in series {
                    let y0 = lerp(acc, yr, plot.bottom(), plot.top());
                    acc += values[i];
                    let y1 = lerp(acc, yr, plot.bottom(), plot.top());
                    let r = Rect::from_min_max(pos2(x + col_w * 0.15, y1), pos2(x + col_w * 0.85, y0));
                    painter.rect_filled(r, 0.0, rgb(*color));
                }

                let galley = painter.layout_no_wrap(cat.clone(), FontId::proportional(AXIS_FONT), text_color);
                let mut shape = TextShape::new(pos2(x + col_w * 0.5, plot.bottom() + 6.0), galley, text_color);
                shape.angle = FRAC_PI_4;
                painter.add(shape);

                let band = Rect::from_min_max(pos2(x, plot.top()), pos2(x + col_w, plot.bottom()));
                if hover_pos.is_some_and(|p| band.contains(p)) {
                    let h = series.iter().map(|s| (s.name.clone(), fmt_tick(s.values[i]))).collect();
                    hovered = Some((cat.clone(), h));
                }
            }
            legend(&painter, plot, series, text_color);
        }
    }

    axis_labels(&painter, full, plot, spec, text_color);

    if let Some((label, rows)) = hovered {
        resp.on_hover_ui_at_pointer(|ui| {
            ui.strong(label);
            for (k, v) in rows {
                ui.label(format!("{k}: {v}"));
            }
        });
    }
}

fn x_ticks(painter: &egui::Painter, plot: Rect, xr: (f64, f64), color: Color32, grid: Color32) {
    for k in 0..=4 {
        let v = xr.0 + (xr.1 - xr.0) * k as f64 / 4.0;
        let x = lerp(v, xr, plot.left(), plot.right());
        painter.line_segment([pos2(x, plot.top()), pos2(x, plot.bottom())], Stroke::new(1.0, grid));
        painter.text(pos2(x, plot.bottom() + 4.0), Align2::CENTER_TOP, fmt_tick(v), FontId::proportional(AXIS_FONT), color);
    }
}

fn y_ticks(painter: &egui::Painter, plot: Rect, yr: (f64, f64), color: Color32, grid: Color32) {
    for k in 0..=4 {
        let v = yr.0 + (yr.1 - yr.0) * k as f64 / 4.0;
        let y = lerp(v, yr, plot.bottom(), plot.top());
        painter.line_segment([pos2(plot.left(), y), pos2(plot.right(), y)], Stroke::new(1.0, grid));
        painter.text(pos2(plot.left() - 4.0, y), Align2::RIGHT_CENTER, fmt_tick(v), FontId::proportional(AXIS_FONT), color);
    }
}

fn legend(painter: &egui::Painter, plot: Rect, series: &[Series], color: Color32) {
    let mut at = Pos2::new(plot.right() - 90.0, plot.top() + 6.0);
    for s in series {
        painter.rect_filled(Rect::from_min_size(at, Vec2::splat(10.0)), 1.0, rgb(s.color));
        painter.text(at + vec2(14.0, 5.0), Align2::LEFT_CENTER, &s.name, FontId::proportional(AXIS_FONT), color);
        at.y += 16.0;
    }
}

fn axis_labels(painter: &egui::Painter, full: Rect, plot: Rect, spec: &ChartSpec, color: Color32) {
    painter.text(
        pos2(plot.center().x, full.bottom() - 2.0),
        Align2::CENTER_BOTTOM,
        &spec.x_label,
        FontId::proportional(12.0),
        color,
    );
    let galley = painter.layout_no_wrap(spec.y_label.clone(), FontId::proportional(12.0), color);
    let mut shape = TextShape::new(pos2(full.left() + 2.0, plot.center().y + galley.size().x * 0.5), galley, color);
    shape.angle = -std::f32::consts::FRAC_PI_2;
    painter.add(shape);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_never_collapse() {
        assert_eq!(padded_range([3.0, 3.0].into_iter(), 0.0), (2.5, 3.5));
        assert_eq!(padded_range(std::iter::empty(), 0.1), (0.0, 1.0));
        assert_eq!(padded_range([0.0, 10.0].into_iter(), 0.1), (-1.0, 11.0));
    }
}
