use super::*;
use crate::graphics_device::BlendOp;

#[test]
fn test_defaults_match_pass_defaults() {
    assert_eq!(BlendMode::default(), BlendMode::Opaque);
    assert_eq!(DepthMask::default(), DepthMask::Write);
    assert_eq!(DepthTest::default(), DepthTest::Less);
    assert_eq!(DrawMode::default(), DrawMode::Triangles);
}

#[test]
fn test_blend_modes() {
    assert!(!BlendMode::Opaque.blend_state().blend_enable);

    let alpha = BlendMode::Alpha.blend_state();
    assert!(alpha.blend_enable);
    assert_eq!(alpha.src_color_factor, BlendFactor::SrcAlpha);
    assert_eq!(alpha.dst_color_factor, BlendFactor::OneMinusSrcAlpha);
    assert_eq!(alpha.color_blend_op, BlendOp::Add);

    let additive = BlendMode::Additive.blend_state();
    assert!(additive.blend_enable);
    assert_eq!(additive.src_color_factor, BlendFactor::One);
    assert_eq!(additive.dst_color_factor, BlendFactor::One);
}

#[test]
fn test_blend_modes_are_distinct() {
    for (i, a) in BlendMode::ALL.iter().enumerate() {
        for b in &BlendMode::ALL[i + 1..] {
            assert_ne!(a.blend_state(), b.blend_state(), "{:?} / {:?}", a, b);
        }
    }
}

#[test]
fn test_depth_masks() {
    assert!(DepthMask::Write.depth_write_enabled());
    assert!(!DepthMask::ReadOnly.depth_write_enabled());
}

#[test]
fn test_every_depth_test_maps_to_its_own_compare_op() {
    let ops: Vec<CompareOp> = DepthTest::ALL.iter().map(|t| t.compare_op()).collect();
    assert_eq!(ops, vec![
        CompareOp::Never,
        CompareOp::Less,
        CompareOp::Equal,
        CompareOp::LessOrEqual,
        CompareOp::Greater,
        CompareOp::NotEqual,
        CompareOp::GreaterOrEqual,
        CompareOp::Always,
    ]);
}

#[test]
fn test_every_draw_mode_maps_to_its_own_topology() {
    let topologies: Vec<PrimitiveTopology> = DrawMode::ALL.iter().map(|m| m.topology()).collect();
    assert_eq!(topologies, vec![
        PrimitiveTopology::TriangleList,
        PrimitiveTopology::TriangleStrip,
        PrimitiveTopology::LineList,
        PrimitiveTopology::LineStrip,
        PrimitiveTopology::LineLoop,
    ]);
}

#[test]
fn test_render_state_default() {
    let state = RenderState::default();
    assert_eq!(state.blend_mode, BlendMode::Opaque);
    assert!(state.depth_mask.depth_write_enabled());
    assert_eq!(state.depth_test.compare_op(), CompareOp::Less);
}
