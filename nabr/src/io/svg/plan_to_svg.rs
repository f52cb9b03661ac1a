use crate::entities::{PackedLayout, Plan};
use crate::geometry::primitives::Rect;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use itertools::Itertools;
use svg::Document;
use svg::node::element::path::Data;
use svg::node::element::{Definitions, Group, Text, Title, Use};

/// Draws the footprint of `plan` and, if given and enabled in `options`, the units of `layout`.
///
/// Row 0 of the plan is drawn at the top, so the top band of an L or U appears above its legs.
pub fn plan_to_svg(
    plan: &Plan,
    layout: Option<&PackedLayout>,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let bbox = match layout.and_then(|l| l.bbox()) {
        Some(units_bbox) if options.units => Rect::bounding_rect(plan.bbox(), units_bbox),
        _ => plan.bbox(),
    };
    let vbox = bbox.scale(1.10);

    let theme = &options.theme;

    let stroke_width =
        f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the left top of the plan
        let counts = layout
            .map(|l| {
                l.counts()
                    .iter()
                    .map(|(unit_type, n)| format!("{unit_type}: {n}"))
                    .join(", ")
            })
            .unwrap_or_default();
        let label_content = format!(
            "{} | {} x {} cells | {} occupied | {} | {}",
            plan.shape(),
            plan.rows(),
            plan.cols(),
            plan.n_occupied(),
            counts,
            title,
        );
        let font_size = f64::min(bbox.width(), bbox.height()) * 0.025;
        Text::new(label_content)
            .set("x", bbox.x_min as f32)
            .set("y", (bbox.y_min - 0.5 * font_size) as f32)
            .set("font-size", font_size as f32)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw the plan: footprint cells filled, empty cells only outlined
    let plan_group = {
        let footprint_data = plan
            .occupied_cells()
            .fold(Data::new(), |data, (r, c)| {
                svg_util::append_rect(data, &plan.cell_rect(r, c))
            });
        let plan_bbox = plan.bbox();
        let title = Title::new(format!(
            "plan, type: {}, dimensions: [{}, {}], grid size: {}, corridor width: {}",
            plan.tag(),
            plan.rows(),
            plan.cols(),
            plan.grid_size(),
            plan.corridor_width()
        ));

        let mut plan_group = Group::new()
            .set("id", "plan")
            .add(svg_util::data_to_path(
                svg_util::rect_data(&plan_bbox),
                &[
                    ("fill", &*format!("{}", theme.empty_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", stroke_width)),
                ],
            ))
            .add(svg_util::data_to_path(
                footprint_data,
                &[
                    ("fill", &*format!("{}", theme.footprint_fill)),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            ))
            .add(title);

        if options.grid_lines {
            let grid_data = (0..plan.rows())
                .cartesian_product(0..plan.cols())
                .fold(Data::new(), |data, (r, c)| {
                    svg_util::append_rect(data, &plan.cell_rect(r, c))
                });
            plan_group = plan_group.add(svg_util::data_to_path(
                grid_data,
                &[
                    ("fill", "none"),
                    ("stroke", "black"),
                    ("stroke-opacity", "0.3"),
                    ("stroke-width", &*format!("{}", 0.5 * stroke_width)),
                    (
                        "stroke-dasharray",
                        &*format!("{} {}", 1.0 * stroke_width, 2.0 * stroke_width),
                    ),
                ],
            ));
        }
        plan_group
    };

    //draw units, one definition per unit type referenced by every placed unit
    let units_group = match (layout, options.units) {
        (Some(layout), true) => {
            let unit_types = layout.counts().into_iter().map(|(t, _)| t).collect_vec();
            let mut unit_defs = Definitions::new();
            for (i, unit_type) in unit_types.iter().enumerate() {
                let Some(pu) = layout.iter().find(|pu| pu.unit_type == *unit_type) else {
                    continue;
                };
                let color = theme.unit_color(i);
                let stroke_color = svg_util::change_brightness(color, 0.5);
                let rect = Rect {
                    x_min: 0.0,
                    y_min: 0.0,
                    x_max: pu.rect.width(),
                    y_max: pu.rect.height(),
                };
                unit_defs = unit_defs.add(
                    Group::new().set("id", format!("unit_{i}")).add(svg_util::data_to_path(
                        svg_util::rect_data(&rect),
                        &[
                            ("fill", &*format!("{}", color)),
                            ("fill-opacity", &*format!("{}", theme.unit_fill_opac)),
                            ("stroke", &*format!("{}", stroke_color)),
                            ("stroke-width", &*format!("{}", stroke_width)),
                        ],
                    )),
                );
            }
            let mut units_group = Group::new().set("id", "units").add(unit_defs);
            for pu in layout.iter() {
                let Some(i) = unit_types.iter().position(|t| *t == pu.unit_type) else {
                    continue;
                };
                let title = Title::new(format!(
                    "unit, type: {}, size: {} x {}",
                    pu.unit_type,
                    pu.rect.width(),
                    pu.rect.height()
                ));
                units_group = units_group.add(
                    Use::new()
                        .set(
                            "transform",
                            format!("translate({} {})", pu.rect.x_min, pu.rect.y_min),
                        )
                        .set("xlink:href", format!("#unit_{i}"))
                        .add(title),
                );
            }
            Some(units_group)
        }
        _ => None,
    };

    let vbox_svg = (
        vbox.x_min as f32,
        vbox.y_min as f32,
        vbox.width() as f32,
        vbox.height() as f32,
    );

    let mut document = Document::new()
        .set("viewBox", vbox_svg)
        .set("xmlns:xlink", "http://www.w3.org/1999/xlink")
        .add(plan_group);

    if let Some(units_group) = units_group {
        document = document.add(units_group);
    }
    if options.label {
        document = document.add(label);
    }
    document
}
