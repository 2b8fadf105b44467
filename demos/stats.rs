use soccer_ball::{FaceKind, SeamParams, SoccerBall, TessellationConfig};

/// Build the soccer ball and report what a renderer would receive.
#[derive(argh::FromArgs)]
struct Args {
    /// uniform subdivision levels per face triangle
    #[argh(option, default = "5")]
    detail: i32,
    /// angular radius (and depth) of the seams
    #[argh(option, default = "SeamParams::default().radius")]
    seam_radius: f64,
    /// extra subdivision levels along the seams (0..=2)
    #[argh(option, default = "SeamParams::default().extra_detail")]
    seam_detail: u32,
}

fn main() {
    env_logger::init();
    let args: Args = argh::from_env();

    let ball = match SoccerBall::build() {
        Ok(ball) => ball,
        Err(e) => {
            log::error!("Geometry construction failed: {}", e);
            std::process::exit(1);
        }
    };
    let config = TessellationConfig {
        detail_level: args.detail,
        seam: SeamParams {
            radius: args.seam_radius,
            extra_detail: args.seam_detail,
        },
    };

    let mesh = ball.to_mesh(&config);
    let (min_radius, max_radius) = mesh
        .pentagons
        .iter()
        .chain(mesh.hexagons.iter())
        .map(|v| glam::Vec3::from(v.position).length())
        .fold((f32::INFINITY, 0.0f32), |(lo, hi), r| (lo.min(r), hi.max(r)));

    println!(
        "faces: {} pentagons, {} hexagons",
        ball.pentagons.len(),
        ball.hexagons.len()
    );
    for kind in [FaceKind::Pentagon, FaceKind::Hexagon] {
        let vertices = mesh.panel(kind);
        println!(
            "{:?} panels: {} triangles, {} bytes",
            kind,
            vertices.len() / 3,
            bytemuck::cast_slice::<_, u8>(vertices).len()
        );
    }
    println!("total triangles: {}", mesh.triangle_count());
    println!("radius range: {:.6} .. {:.6}", min_radius, max_radius);
}
