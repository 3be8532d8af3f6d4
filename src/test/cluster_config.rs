use crate::cluster::{ClusterConfig, DEFAULT_BLOCKS, DEFAULT_NODES_PER_BLOCK};

#[test]
fn default_config_is_mira_topology() {
    let cfg = ClusterConfig::default();
    assert_eq!(cfg.blocks, 96);
    assert_eq!(cfg.nodes_per_block, 512);
    assert_eq!(cfg.total_nodes(), 96 * 512);
    assert_eq!(DEFAULT_BLOCKS, 96);
    assert_eq!(DEFAULT_NODES_PER_BLOCK, 512);
}

#[test]
fn blocks_needed_rounds_down() {
    let cfg = ClusterConfig::new(2, 4);
    assert_eq!(cfg.blocks_needed(4), 1);
    assert_eq!(cfg.blocks_needed(8), 2);
    // 不是整数倍时向下取整（已知的偏小分配）
    assert_eq!(cfg.blocks_needed(5), 1);
    assert_eq!(cfg.blocks_needed(7), 1);
    assert_eq!(cfg.blocks_needed(3), 0);
    assert_eq!(cfg.blocks_needed(0), 0);
}

#[test]
fn config_parses_with_defaults() {
    let cfg: ClusterConfig = serde_json::from_str("{}").expect("parse config");
    assert_eq!(cfg, ClusterConfig::default());

    let cfg: ClusterConfig =
        serde_json::from_str(r#"{ "blocks": 2, "nodes_per_block": 4 }"#).expect("parse config");
    assert_eq!(cfg, ClusterConfig::new(2, 4));
}
