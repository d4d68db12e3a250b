/// WGSL shader for the lit cube lattice.
///
/// Frame globals live in group 0; the per-cube position uniform lives in
/// group 1 and is rebound with a dynamic offset before every draw.
pub const CUBE_SHADER: &str = r#"
struct Globals {
    proj: mat4x4<f32>,
    view: mat4x4<f32>,
    tint: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

struct CubeUniform {
    offset: vec4<f32>,
};

@group(1) @binding(0)
var<uniform> cube: CubeUniform;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) normal: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput) -> VertexOutput {
    let world_pos = vertex.position + cube.offset.xyz;

    var out: VertexOutput;
    out.clip_position = globals.proj * globals.view * vec4<f32>(world_pos, 1.0);
    out.normal = vertex.normal;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let light_dir = normalize(vec3<f32>(0.3, 1.0, 0.5));
    let ambient = 0.3;
    let diffuse = max(dot(normalize(in.normal), light_dir), 0.0);
    let lighting = ambient + diffuse * 0.7;
    return vec4<f32>(globals.tint.rgb * lighting, globals.tint.a);
}
"#;
