//! Opens a window with the program inspector over a small synthetic scene.
//!
//! Run with `RUST_LOG=info` to see the output of the "log" buttons. Pass a
//! path to an image as the first argument to get a texture preview.

use shaderscope::*;

fn build_scene(image: Option<String>) -> Result<ProgramStore> {
    let mut store = ProgramStore::new();
    let floor = store.add_mesh(Mesh::new("floor", "PlaneGeometry"));
    let crate_a = store.add_mesh(Mesh::new("crate A", "BoxGeometry"));
    let crate_b = store.add_mesh(Mesh::new("crate B", "BoxGeometry"));
    let ocean = store.add_mesh(Mesh::new("ocean", "PlaneGeometry"));
    let sky = store.add_mesh(Mesh::new("sky", "SphereGeometry"));

    let albedo = Texture::new("tex-albedo")
        .with_image(image.unwrap_or_else(|| "assets/crate.png".to_string()), 512, 512)
        .with_wrap(WrapMode::Repeat.raw())
        .with_encoding(TextureEncoding::Srgb.raw())
        .with_flip_y(true);

    store.insert_program(
        ProgramRecord::new(
            ShaderProgram::new(1, "MeshStandardMaterial")
                .with_uniform(UniformDescriptor::cached("diffuse", [0.8, 0.8, 0.8]))
                .with_uniform(UniformDescriptor::cached("roughness", [0.6]))
                .with_uniform(UniformDescriptor::cached("metalness", [0.1]))
                .with_uniform(UniformDescriptor::cached("map", [0.0]))
                .with_uniform(UniformDescriptor::cached("projectionMatrix", [1.0; 16]))
                .with_uniform(UniformDescriptor::cached("modelViewMatrix", [1.0; 16])),
            Material::new("standard-crates", "MeshStandardMaterial")
                .with_name("crates")
                .with_texture("map", albedo),
        )
        .with_meshes([crate_a, crate_b]),
    )?;

    store.insert_program(
        ProgramRecord::new(
            ShaderProgram::new(2, "MeshBasicMaterial")
                .with_uniform(UniformDescriptor::cached("diffuse", [0.3, 0.3, 0.35]))
                .with_uniform(UniformDescriptor::cached("opacity", [1.0])),
            Material::new("basic-floor", "MeshBasicMaterial"),
        )
        .with_meshes([floor]),
    )?;

    store.insert_program(
        ProgramRecord::new(
            ShaderProgram::new(3, "ShaderMaterial")
                .with_uniform(UniformDescriptor::new("uTime"))
                .with_uniform(UniformDescriptor::new("uColor"))
                .with_uniform(UniformDescriptor::new("uWaves")),
            Material::new("shader-ocean", "ShaderMaterial")
                .with_name("ocean")
                .with_glsl_version("300 es")
                .with_uniform("uTime", 12.5_f32)
                .with_uniform("uColor", UniformValue::Color(Vec3::new(0.0, 0.4, 0.7)))
                .with_uniform("uWaves", Vec4::new(0.2, 1.4, 0.05, 3.0))
                .with_uniform("uLabel", "deep water")
                .with_uniform("uSampler", UniformValue::Opaque("WebGLSampler".to_string()))
                .with_uniform("uEnabled", false),
        )
        .with_meshes([ocean]),
    )?;

    // Not compiled yet: listed without a title or badges.
    let mut pending = ProgramRecord::new(
        ShaderProgram::new(4, "RawShaderMaterial"),
        Material::new("raw-sky", "RawShaderMaterial"),
    )
    .with_meshes([sky]);
    pending.program = None;
    store.insert_program(pending)?;

    Ok(store)
}

fn main() -> Result<()> {
    init_logging();

    let store = build_scene(std::env::args().nth(1))?.into_shared();
    let options = PanelOptions {
        title: "Shader programs".to_string(),
        ..PanelOptions::default()
    };

    run_viewer(
        Overlay::new(store).with_options(options),
        ViewerOptions {
            title: "shaderscope demo".to_string(),
            ..ViewerOptions::default()
        },
    )
}
