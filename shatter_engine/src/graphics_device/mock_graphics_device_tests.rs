/// Unit tests for MockGraphicsDevice and associated mock types.

use super::*;
use crate::graphics_device::{BufferUsage, TextureFormat, FilterMode, BlendFactor};

fn program_desc(label: &str, vertex: &str, fragment: &str) -> ProgramDesc {
    ProgramDesc {
        label: label.to_string(),
        vertex_source: vertex.to_string(),
        fragment_source: fragment.to_string(),
    }
}

// ============================================================================
// MockBuffer Tests
// ============================================================================

#[test]
fn test_mock_buffer_update_in_range() {
    let buffer = MockBuffer::new(8, "b".to_string(), &[0; 8]);
    buffer.update(4, &[1, 2, 3, 4]).unwrap();
    assert_eq!(*buffer.contents.lock().unwrap(), vec![0, 0, 0, 0, 1, 2, 3, 4]);
}

#[test]
fn test_mock_buffer_update_overflow_fails() {
    let buffer = MockBuffer::new(4, "b".to_string(), &[]);
    assert!(buffer.update(2, &[1, 2, 3]).is_err());
}

// ============================================================================
// MockProgram Tests
// ============================================================================

#[test]
fn test_mock_program_reflects_uniform_declarations() {
    let program = MockProgram::from_sources("p", &[
        "uniform mat4 Model;\nuniform mat4 View;\nvoid main() {}",
        "uniform vec4 ObjectColor;\nuniform sampler2D Texture0;\nuniform mat4 View;",
    ]);

    assert_eq!(program.uniforms, vec!["Model", "View", "ObjectColor", "Texture0"]);
    assert_eq!(program.uniform_location("View"), Some(1));
    assert_eq!(program.uniform_location("Texture0"), Some(3));
    assert_eq!(program.uniform_location("Projection"), None);
}

#[test]
fn test_mock_program_array_uniform() {
    let program = MockProgram::from_sources("p", &["uniform vec4 Lights[4];"]);
    assert_eq!(program.uniform_location("Lights"), Some(0));
}

// ============================================================================
// MockCommandList Tests
// ============================================================================

#[test]
fn test_mock_command_list_records_in_order() {
    let mut cmd = MockCommandList::new();
    cmd.begin().unwrap();
    cmd.set_depth_write(false).unwrap();
    cmd.set_depth_compare(CompareOp::LessOrEqual).unwrap();
    cmd.set_blend_state(ColorBlendState::blended(BlendFactor::One, BlendFactor::One)).unwrap();
    cmd.set_blend_state(ColorBlendState::default()).unwrap();
    cmd.draw(PrimitiveTopology::LineLoop, 4, 0).unwrap();
    cmd.end().unwrap();

    assert_eq!(cmd.commands, vec![
        "begin",
        "set_depth_write(false)",
        "set_depth_compare(LessOrEqual)",
        "set_blend_state(One, One)",
        "set_blend_state(disabled)",
        "draw(LineLoop, 4)",
        "end",
    ]);
}

#[test]
fn test_mock_command_list_uniform_tracking() {
    let mut cmd = MockCommandList::new();
    cmd.set_uniform(2, UniformValue::Int(1)).unwrap();
    cmd.set_uniform(2, UniformValue::Int(5)).unwrap();

    assert_eq!(cmd.count("set_uniform"), 2);
    assert_eq!(cmd.last_uniform(2), Some(UniformValue::Int(5)));
    assert_eq!(cmd.last_uniform(3), None);
}

// ============================================================================
// MockGraphicsDevice Tests
// ============================================================================

#[test]
fn test_mock_device_tracks_resources() {
    let mut device = MockGraphicsDevice::new();

    device.create_buffer(BufferDesc { size: 96, usage: BufferUsage::Vertex, dynamic: false }, &[0; 96]).unwrap();
    device.create_texture(TextureDesc {
        width: 2,
        height: 2,
        format: TextureFormat::R8G8B8A8_UNORM,
        filter: FilterMode::Linear,
        data: vec![0; 16],
    }).unwrap();
    device.create_program(&program_desc("shaders/basic", "void main() {}", "void main() {}")).unwrap();

    assert_eq!(device.get_created_buffers(), vec!["buffer_Vertex_96"]);
    assert_eq!(device.get_created_textures(), vec!["texture_2x2"]);
    assert_eq!(device.get_created_programs(), vec!["shaders/basic"]);
}

#[test]
fn test_mock_device_compile_failures() {
    let mut device = MockGraphicsDevice::new();

    let empty = device.create_program(&program_desc("empty", "", "void main() {}"));
    assert!(matches!(empty, Err(Error::ShaderCompilation(_))));

    let broken = device.create_program(&program_desc("broken", "void main() {}", "#error nope"));
    assert!(matches!(broken, Err(Error::ShaderCompilation(_))));

    assert!(device.get_created_programs().is_empty());
}

#[test]
fn test_mock_device_failure_switches() {
    let mut device = MockGraphicsDevice::new();
    device.fail_buffers = true;
    device.fail_surfaces = true;

    assert!(device.create_buffer(BufferDesc { size: 4, usage: BufferUsage::Index, dynamic: false }, &[]).is_err());
    let desc = RenderSurfaceDesc { width: 8, height: 8, color_format: TextureFormat::R8G8B8A8_UNORM, depth: true };
    assert!(device.create_render_surface(&desc).is_err());
}

#[test]
fn test_mock_device_submit_and_resize() {
    let mut device = MockGraphicsDevice::new();
    let cmd = device.create_command_list().unwrap();
    device.submit(&[cmd.as_ref()]).unwrap();
    device.resize(640, 480);

    assert_eq!(device.submitted_count(), 1);
    assert_eq!(device.size, (640, 480));
}
