use geom_kernel::camera::build_proj_mat;
use geom_kernel::math::{build_mat4_from_transform, look_at, Aabb, Ray, Vector3};
use geom_kernel::{Camera, Face, KernelConfig};
use rand::Rng;
use std::io::{stdout, Write};
use std::thread::sleep;
use std::time::Duration;

// Shade per entry face, so box sides read differently
fn face_char(face: Option<Face>) -> char {
    match face {
        Some(Face::Front) => '#',
        Some(Face::Back) => '%',
        Some(Face::Left) => 'O',
        Some(Face::Right) => 'o',
        Some(Face::Top) => '=',
        Some(Face::Bottom) => '-',
        None => '@',
    }
}

fn get_terminal_size() -> (usize, usize) {
    term_size::dimensions().unwrap_or((80, 24))
}

struct AsciiRaycaster {
    camera: Camera,
    config: KernelConfig,
    boxes: Vec<Aabb>,
}

impl AsciiRaycaster {
    fn new(width: usize, height: usize) -> Self {
        // Terminal cells are about twice as tall as wide
        let camera = Camera::new(60.0, 0.1, 100.0, width as u32, (height * 2) as u32);
        Self { camera, config: KernelConfig::default(), boxes: Vec::new() }
    }

    fn point_camera(&mut self, position: Vector3, target: Vector3) {
        self.camera.trans.pos = position;
        self.camera.trans.euler_angles = look_at(position, target);
    }

    fn render_frame(&self) -> geom_kernel::Result<Vec<Vec<char>>> {
        let width = self.camera.width as usize;
        let height = self.camera.height as usize / 2;

        let proj = build_proj_mat(&self.camera)?;
        let model = build_mat4_from_transform(&self.camera.trans);
        let origin = self.camera.trans.pos;

        // Nearest boxes first, so the first hit per pixel wins
        let mut order: Vec<&Aabb> = self.boxes.iter().collect();
        order.sort_by(|a, b| {
            a.origin
                .distance(&origin)
                .total_cmp(&b.origin.distance(&origin))
        });

        let mut frame = vec![vec![' '; width]; height];
        for (y, row) in frame.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                let ndc_x = (x as f32 + 0.5) / width as f32 * 2.0 - 1.0;
                let ndc_y = 1.0 - (y as f32 + 0.5) / height as f32 * 2.0;

                // Undo the projection's x/y scale on the z = -1 plane
                let view_dir = Vector3::new(ndc_x / proj[0][0], ndc_y / proj[1][1], -1.0);
                let ray = Ray::new(origin, model.multiply_direction(view_dir));

                for aabb in &order {
                    let hit = self.config.ray_intersects(&ray, aabb)?;
                    if hit.intersects {
                        *cell = face_char(hit.face);
                        break;
                    }
                }
            }
        }
        Ok(frame)
    }

    fn render_to_console(&self) -> geom_kernel::Result<()> {
        let frame = self.render_frame()?;
        let mut out = String::with_capacity(frame.len() * (self.camera.width as usize + 1));
        out.push_str("\x1B[2J\x1B[1;1H");
        for row in &frame {
            out.extend(row.iter());
            out.push('\n');
        }

        let mut stdout = stdout();
        // A closed pipe just ends the frame early
        let _ = stdout.write_all(out.as_bytes());
        let _ = stdout.flush();
        Ok(())
    }
}

fn main() {
    simple_logger::init_with_level(log::Level::Warn).unwrap();

    let (term_width, term_height) = get_terminal_size();
    let mut raycaster = AsciiRaycaster::new(term_width, term_height.saturating_sub(2).max(1));

    let mut rng = rand::thread_rng();

    // Floor slab
    raycaster.boxes.push(Aabb::make(Vector3::new(0.0, -4.0, 0.0), Vector3::new(12.0, 0.5, 12.0)));

    for _ in 0..6 {
        let half_dim = Vector3::new(
            rng.gen_range(0.5..1.5),
            rng.gen_range(0.5..2.0),
            rng.gen_range(0.5..1.5),
        );
        let center = Vector3::new(
            rng.gen_range(-6.0..6.0),
            -3.5 + half_dim.y,
            rng.gen_range(-6.0..6.0),
        );
        raycaster.boxes.push(Aabb::make(center, half_dim));
    }

    let total_frames = 240;
    let radius = 18.0;
    let target = Vector3::new(0.0, -2.0, 0.0);

    for frame in 0..total_frames {
        let angle = frame as f32 / total_frames as f32 * std::f32::consts::TAU;
        let position = Vector3::new(radius * angle.cos(), 4.0, radius * angle.sin());
        raycaster.point_camera(position, target);

        if let Err(err) = raycaster.render_to_console() {
            log::error!("frame {frame} failed: {err}");
            return;
        }

        println!("Frame: {}/{} - Camera Position: {:.1}", frame + 1, total_frames, position);
        println!("Press Ctrl+C to exit");

        sleep(Duration::from_millis(50));
    }
}
