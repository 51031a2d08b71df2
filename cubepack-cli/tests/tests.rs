#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::{Duration, Instant};

    use cubepack::io::ext_repr::{ExtContainer, ExtInstance, ExtItem};
    use cubepack::entities::{Container, Parcel};
    use cubepack::geometry::Rotation;
    use cubepack::geometry::primitives::Point3;
    use cubepack::io::{export, import};
    use cubepack::pack;
    use cubepack::util::assertions;
    use cubepack_cli::config::CubepackConfig;
    use cubepack_cli::io;
    use cubepack_cli::io::bin_to_svg::bin_to_svg;
    use cubepack_cli::io::output::PackOutput;
    use cubepack_cli::io::svg_util::{Projection, SvgDrawOptions, SvgLayoutTheme};
    use itertools::Itertools;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .is_test(true)
            .try_init();
    }

    fn container(name: &str, w: u64, h: u64, d: u64) -> ExtContainer {
        ExtContainer {
            name: name.to_string(),
            width: w,
            height: h,
            depth: d,
            weight: 0,
        }
    }

    fn item(id: u64, w: u64, h: u64, d: u64) -> ExtItem {
        ExtItem {
            id,
            width: w,
            height: h,
            depth: d,
            weight: 1,
            demand: 1,
        }
    }

    #[test_case("../assets/shipping_boxes.json"; "shipping_boxes")]
    #[test_case("../assets/pallets.json"; "pallets")]
    #[test_case("../assets/single_item.json"; "single_item")]
    fn test_instance(instance_path: &str) {
        init_logger();
        let ext_instance = io::read_instance(Path::new(instance_path)).unwrap();
        let instance = import::import(&ext_instance).unwrap();

        let start = Instant::now();
        let bins = pack(&instance.containers, instance.expanded_items()).unwrap();
        let solution = export::export(&bins, start.elapsed());

        assert!(assertions::packing_is_feasible(&bins));
        assert_eq!(solution.n_items, instance.total_item_qty());
        assert_eq!(solution.bins.len(), bins.len());
        assert!(solution.density > 0.0 && solution.density <= 1.0);

        // every copy of every item shows up in the solution
        let placed_counts = solution
            .bins
            .iter()
            .flat_map(|b| b.placed_items.iter().map(|pi| pi.item_id))
            .counts();
        for (parcel, qty) in &instance.items {
            assert_eq!(placed_counts.get(&parcel.id), Some(qty));
        }

        for (ext_bin, bin) in solution.bins.iter().zip(&bins) {
            assert_eq!(ext_bin.container.name, bin.name());
            assert_eq!(ext_bin.total_weight, bin.total_weight());
            for pi in &ext_bin.placed_items {
                let Point3(x, y, z) = pi.position;
                let [w, h, d] = pi.dims;
                assert!(x + w <= ext_bin.container.width);
                assert!(y + h <= ext_bin.container.height);
                assert!(z + d <= ext_bin.container.depth);
                let parcel = instance.item(pi.item_id).unwrap();
                assert_eq!(
                    pi.rotation
                        .orient(parcel.width, parcel.height, parcel.depth),
                    pi.dims
                );
            }
        }

        let output = PackOutput {
            instance: ext_instance,
            solution,
            config: CubepackConfig::default(),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert!(json["containers"].is_array());
        assert!(json["items"].is_array());
        assert_eq!(json["solution"]["bins"].as_array().unwrap().len(), bins.len());
    }

    #[test]
    fn placed_item_format() {
        let catalog = vec![Container::new("c", 20, 100, 30, 0)];
        let bins = pack(&catalog, [Parcel::new(4, 100, 20, 30, 1)]).unwrap();
        let json = serde_json::to_value(export::export(&bins, Duration::ZERO)).unwrap();

        let pi = &json["bins"][0]["placed_items"][0];
        assert_eq!(pi["item_id"], 4);
        assert_eq!(pi["rotation"], "RT2");
        assert_eq!(pi["position"], serde_json::json!([0, 0, 0]));
        assert_eq!(pi["dims"], serde_json::json!([20, 100, 30]));
        assert_eq!(
            serde_json::from_value::<Rotation>(pi["rotation"].clone()).unwrap(),
            Rotation::RT2
        );
    }

    #[test]
    fn single_item_escalates_to_large() {
        let ext_instance = io::read_instance(Path::new("../assets/single_item.json")).unwrap();
        let instance = import::import(&ext_instance).unwrap();
        let bins = pack(&instance.containers, instance.expanded_items()).unwrap();

        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].name(), "large");
        assert_eq!(bins[0].total_weight(), 5 + 3);
    }

    #[test]
    fn demand_is_expanded_in_order() {
        let mut items = vec![item(1, 10, 10, 10), item(2, 5, 5, 5)];
        items[0].demand = 3;
        items[1].demand = 0;
        let ext_instance = ExtInstance {
            name: "demand".to_string(),
            containers: vec![container("c", 100, 100, 100)],
            items,
        };
        let instance = import::import(&ext_instance).unwrap();

        assert_eq!(instance.total_item_qty(), 3);
        assert_eq!(instance.item_volume(), 3 * 1000);
        assert!(instance.expanded_items().iter().all(|p| p.id == 1));
        assert!(instance.item(2).is_some());
    }

    #[test]
    fn import_rejects_duplicate_ids() {
        let ext_instance = ExtInstance {
            name: "duplicates".to_string(),
            containers: vec![container("c", 10, 10, 10)],
            items: vec![item(1, 1, 1, 1), item(2, 1, 1, 1), item(1, 2, 2, 2)],
        };
        let err = import::import(&ext_instance).unwrap_err();
        assert!(err.to_string().contains("duplicates: [1]"), "{err}");
    }

    #[test_case(container("flat", 10, 0, 10); "zero height")]
    #[test_case(container("thin", 0, 10, 10); "zero width")]
    fn import_rejects_containers_without_volume(c: ExtContainer) {
        let ext_instance = ExtInstance {
            name: "degenerate".to_string(),
            containers: vec![container("ok", 10, 10, 10), c],
            items: vec![item(1, 1, 1, 1)],
        };
        assert!(import::import(&ext_instance).is_err());
    }

    #[test]
    fn import_rejects_container_volume_overflow() {
        let side = 1 << 22;
        let ext_instance = ExtInstance {
            name: "huge_container".to_string(),
            containers: vec![container("huge", side, side, side)],
            items: vec![item(1, 1, 1, 1)],
        };
        let err = import::import(&ext_instance).unwrap_err();
        assert!(err.to_string().contains("does not fit in 64 bits"), "{err}");
    }

    #[test_case(item(1, 1 << 22, 1 << 22, 1 << 22), 1; "single item")]
    #[test_case(item(1, 1 << 20, 1 << 20, 1 << 20), 1 << 10; "demand")]
    fn import_rejects_item_volume_overflow(mut ext_item: ExtItem, demand: u64) {
        ext_item.demand = demand;
        let ext_instance = ExtInstance {
            name: "huge_item".to_string(),
            containers: vec![container("c", 10, 10, 10)],
            items: vec![ext_item],
        };
        assert!(import::import(&ext_instance).is_err());
    }

    #[test]
    fn import_rejects_total_item_volume_overflow() {
        // 2^63 each: fine on their own, but not together
        let side = 1 << 21;
        let ext_instance = ExtInstance {
            name: "huge_total".to_string(),
            containers: vec![container("c", 10, 10, 10)],
            items: vec![item(1, side, side, side), item(2, side, side, side)],
        };
        let err = import::import(&ext_instance).unwrap_err();
        assert!(err.to_string().contains("total item volume"), "{err}");
    }

    #[test]
    fn import_rejects_empty_catalog() {
        let ext_instance = ExtInstance {
            name: "empty".to_string(),
            containers: vec![],
            items: vec![item(1, 1, 1, 1)],
        };
        assert!(import::import(&ext_instance).is_err());
    }

    #[test]
    fn instance_defaults() {
        let json = r#"{
            "name": "defaults",
            "containers": [{ "name": "c", "width": 4, "height": 5, "depth": 6 }],
            "items": [{ "id": 7, "width": 1, "height": 2, "depth": 3 }]
        }"#;
        let ext_instance: ExtInstance = serde_json::from_str(json).unwrap();
        assert_eq!(ext_instance.containers[0].weight, 0);
        assert_eq!(ext_instance.items[0].weight, 0);
        assert_eq!(ext_instance.items[0].demand, 1);
    }

    #[test]
    fn config_defaults() {
        let config: CubepackConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CubepackConfig::default());
        assert!(config.svg_export);
        assert!(config.svg_draw_options.draw_labels);

        let config: CubepackConfig = serde_json::from_str(
            r#"{ "svg_export": false, "svg_draw_options": { "projection": "Top", "theme": "Gray" } }"#,
        )
        .unwrap();
        assert!(!config.svg_export);
        assert_eq!(config.svg_draw_options.projection, Projection::Top);
        assert_eq!(config.svg_draw_options.theme, SvgLayoutTheme::Gray);
        assert!(config.svg_draw_options.draw_labels);
    }

    #[test_case(Projection::Front; "front")]
    #[test_case(Projection::Top; "top")]
    #[test_case(Projection::Side; "side")]
    fn svg_contains_all_items(projection: Projection) {
        let ext_instance = io::read_instance(Path::new("../assets/shipping_boxes.json")).unwrap();
        let instance = import::import(&ext_instance).unwrap();
        let bins = pack(&instance.containers, instance.expanded_items()).unwrap();

        let options = SvgDrawOptions {
            projection,
            ..SvgDrawOptions::default()
        };
        for bin in &bins {
            let svg = bin_to_svg(bin, options).to_string();
            assert!(svg.contains(r#"id="bin""#));
            for pi in &bin.placed_items {
                assert!(svg.contains(&format!(r#"id="item_{}""#, pi.item.id)));
            }
        }
    }
}
