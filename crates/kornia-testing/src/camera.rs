use kornia_tensor::Tensor2;

/// Number of values in a pinhole encoding.
pub const PINHOLE_NUM_PARAMS: usize = 12;

/// Intrinsic and extrinsic parameters of a pinhole camera.
///
/// The field order matches the tensor layout produced by [`PinholeParams::to_tensor`]:
/// focal lengths, principal point, image size, rotation vector and translation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PinholeParams {
    /// Focal length along x.
    pub fx: f32,
    /// Focal length along y.
    pub fy: f32,
    /// Principal point x coordinate.
    pub cx: f32,
    /// Principal point y coordinate.
    pub cy: f32,
    /// Image height.
    pub height: f32,
    /// Image width.
    pub width: f32,
    /// Rotation vector x component.
    pub rx: f32,
    /// Rotation vector y component.
    pub ry: f32,
    /// Rotation vector z component.
    pub rz: f32,
    /// Translation x component.
    pub tx: f32,
    /// Translation y component.
    pub ty: f32,
    /// Translation z component.
    pub tz: f32,
}

impl PinholeParams {
    /// Returns the parameters in encoding order.
    pub fn to_array(&self) -> [f32; PINHOLE_NUM_PARAMS] {
        [
            self.fx,
            self.fy,
            self.cx,
            self.cy,
            self.height,
            self.width,
            self.rx,
            self.ry,
            self.rz,
            self.tx,
            self.ty,
            self.tz,
        ]
    }

    /// Encodes the parameters into a `[1, 12]` tensor.
    pub fn to_tensor(&self) -> Tensor2<f32> {
        let data = self.to_array();
        Tensor2::from_shape_fn([1, PINHOLE_NUM_PARAMS], |[_, i]| data[i])
    }
}

impl From<[f32; PINHOLE_NUM_PARAMS]> for PinholeParams {
    fn from(v: [f32; PINHOLE_NUM_PARAMS]) -> Self {
        let [fx, fy, cx, cy, height, width, rx, ry, rz, tx, ty, tz] = v;
        Self {
            fx,
            fy,
            cx,
            cy,
            height,
            width,
            rx,
            ry,
            rz,
            tx,
            ty,
            tz,
        }
    }
}

/// Creates a pinhole model encoded into a single-row tensor.
///
/// # Returns
///
/// A tensor of shape `[1, 12]` holding the arguments in the given order.
///
/// # Example
///
/// ```
/// use kornia_testing::create_pinhole;
///
/// let pinhole = create_pinhole(
///     100.0, 100.0, 32.0, 24.0, 48.0, 64.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0,
/// );
/// assert_eq!(pinhole.shape, [1, 12]);
/// assert_eq!(pinhole.get([0, 4]), Some(&48.0));
/// ```
#[allow(clippy::too_many_arguments)]
pub fn create_pinhole(
    fx: f32,
    fy: f32,
    cx: f32,
    cy: f32,
    height: f32,
    width: f32,
    rx: f32,
    ry: f32,
    rz: f32,
    tx: f32,
    ty: f32,
    tz: f32,
) -> Tensor2<f32> {
    PinholeParams {
        fx,
        fy,
        cx,
        cy,
        height,
        width,
        rx,
        ry,
        rz,
        tx,
        ty,
        tz,
    }
    .to_tensor()
}
