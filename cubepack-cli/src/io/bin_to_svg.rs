use std::cmp::Reverse;

use cubepack::entities::{Bin, Parcel, PlacedItem};
use itertools::Itertools;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::io::svg_util;
use crate::io::svg_util::SvgDrawOptions;

/// Draws an orthographic projection of a bin and the items inside it.
/// Items further away from the viewer are drawn first and darker, so nearer items cover them.
pub fn bin_to_svg(bin: &Bin<Parcel>, options: SvgDrawOptions) -> Document {
    let (h_axis, v_axis, view_axis) = options.projection.axes();
    let colors = options.theme.colors();

    let dims = bin.dims();
    let (width, height, depth) = (
        dims[h_axis] as f64,
        dims[v_axis] as f64,
        dims[view_axis] as f64,
    );
    let margin = 0.05 * f64::max(width, height);
    let stroke_width = f64::min(width, height) * 0.001 * colors.stroke_width_multiplier;

    // svg coordinates grow downwards, bin coordinates upwards
    let flip = |v: f64, extent: f64| height - v - extent;

    let bin_group = Group::new()
        .set("id", "bin")
        .add(Title::new(format!(
            "bin: {}, dims: {} x {} x {}, density: {:.3}%",
            bin.name(),
            dims[0],
            dims[1],
            dims[2],
            bin.density() * 100.0
        )))
        .add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", colors.bin_fill)
                .set("stroke", "black")
                .set("stroke-width", 2.0 * stroke_width),
        );

    let mut items_group = Group::new().set("id", "items");
    let distance = |pi: &PlacedItem<Parcel>| {
        options
            .projection
            .distance(pi.position.into(), pi.dims(), dims)
    };
    let draw_order = bin
        .placed_items
        .iter()
        .sorted_by_key(|pi| Reverse(distance(pi)));

    for pi in draw_order {
        let [ew, eh] = {
            let d = pi.dims();
            [d[h_axis] as f64, d[v_axis] as f64]
        };
        let pos: [u64; 3] = pi.position.into();
        let (x, y) = (pos[h_axis] as f64, flip(pos[v_axis] as f64, eh));

        // items at the back of the bin are drawn darker
        let rel_distance = if depth > 0.0 {
            distance(pi) as f64 / depth
        } else {
            0.0
        };
        let fill = svg_util::change_brightness(colors.item_fill, 1.0 - 0.4 * rel_distance);

        let mut item_group = Group::new()
            .set("id", format!("item_{}", pi.item.id))
            .add(Title::new(format!("item {}: {}", pi.item.id, pi)))
            .add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", y)
                    .set("width", ew)
                    .set("height", eh)
                    .set("fill", fill)
                    .set("stroke", "black")
                    .set("stroke-width", stroke_width)
                    .set("opacity", 0.9),
            );

        if options.draw_labels {
            item_group = item_group.add(
                Text::new(pi.item.id.to_string())
                    .set("x", x + ew / 2.0)
                    .set("y", y + eh / 2.0)
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle")
                    .set("font-size", f64::min(ew, eh) * 0.3),
            );
        }
        items_group = items_group.add(item_group);
    }

    Document::new()
        .set(
            "viewBox",
            (
                -margin,
                -margin,
                width + 2.0 * margin,
                height + 2.0 * margin,
            ),
        )
        .add(bin_group)
        .add(items_group)
}
