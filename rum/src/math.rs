//! Small linear algebra toolkit on top of `cgmath`.
//!
//! Matrices are column-major and follow the OpenGL conventions: right-handed view space,
//! clip-space depth in `[-1, 1]`. Vector arithmetic, dot/cross products, lengths,
//! normalization, inverse and transpose come from the `cgmath` traits re-exported here.

pub use cgmath::{
    vec2, vec3, vec4, ElementWise, InnerSpace, Matrix, MetricSpace, RelativeEq, SquareMatrix,
    Zero,
};
use cgmath::{Matrix4, Point3, Rad, Vector2, Vector3, Vector4};

pub type Vec2 = Vector2<f32>;
pub type Vec3 = Vector3<f32>;
pub type Vec4 = Vector4<f32>;
pub type Mat4 = Matrix4<f32>;

pub const PI: f32 = std::f32::consts::PI;
pub const HALF_PI: f32 = 0.5 * PI;
pub const QUARTER_PI: f32 = 0.25 * PI;
pub const DEG_TO_RAD: f32 = PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / PI;
pub const FLOAT_EPSILON: f32 = f32::EPSILON;

pub fn ones2() -> Vec2 {
    vec2(1.0, 1.0)
}

pub fn ones3() -> Vec3 {
    vec3(1.0, 1.0, 1.0)
}

pub fn ones4() -> Vec4 {
    vec4(1.0, 1.0, 1.0, 1.0)
}

/// Component-wise comparison within `f32` rounding error, for vectors and matrices alike.
pub fn approx_eq<T: RelativeEq>(a: T, b: T) -> bool {
    a.relative_eq(&b, T::default_epsilon(), T::default_max_relative())
}

/// Matrix with every element set to `value`.
pub fn splat(value: f32) -> Mat4 {
    let c = vec4(value, value, value, value);
    Mat4::from_cols(c, c, c, c)
}

pub fn identity() -> Mat4 {
    Mat4::identity()
}

pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    cgmath::ortho(left, right, bottom, top, near, far)
}

pub fn perspective(fov_radians: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4 {
    cgmath::perspective(Rad(fov_radians), aspect_ratio, near, far)
}

/// View matrix of a camera at `position` looking at `target`.
pub fn look_at(position: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    Mat4::look_at_rh(
        Point3::new(position.x, position.y, position.z),
        Point3::new(target.x, target.y, target.z),
        up,
    )
}

pub fn translation(position: Vec3) -> Mat4 {
    Mat4::from_translation(position)
}

pub fn scale(factors: Vec3) -> Mat4 {
    Mat4::from_nonuniform_scale(factors.x, factors.y, factors.z)
}

pub fn euler_x(angle_radians: f32) -> Mat4 {
    Mat4::from_angle_x(Rad(angle_radians))
}

pub fn euler_y(angle_radians: f32) -> Mat4 {
    Mat4::from_angle_y(Rad(angle_radians))
}

pub fn euler_z(angle_radians: f32) -> Mat4 {
    Mat4::from_angle_z(Rad(angle_radians))
}

/// Rotation about x, then y, then z.
pub fn euler_xyz(x_radians: f32, y_radians: f32, z_radians: f32) -> Mat4 {
    euler_z(z_radians) * euler_y(y_radians) * euler_x(x_radians)
}

/// Maps pixel coordinates (origin top-left, y down) of a `width` x `height` viewport to
/// clip space.
pub fn pixel_to_clip(width: f32, height: f32) -> Mat4 {
    ortho(0.0, width, height, 0.0, -1.0, 1.0)
}
