use crate::core::constants::DEFAULT_SAMPLE_DENSITY;
use crate::crs::dispatch;
use crate::crs::hub;
use crate::crs::projection::Projection;
use crate::crs::rect;
use crate::crs::registry::{SrsCode, resolve_with};
use crate::crs::service::{GeodeticService, ProjService};
use crate::geom::apply;
use crate::geom::shape::Shape;
use crate::util::coord::Coordinate;
use crate::util::error::CrsError;
use geo_types::{Coord, Geometry, Point, Rect};

/// Configured entry point for resolving systems and transforming data.
///
/// # Example
///
/// ```no_run
/// use sinoproj::Transformer;
/// use geo_types::point;
///
/// # fn main() -> Result<(), sinoproj::CrsError> {
/// let transformer = Transformer::builder().exact(false).build();
/// let gcj = transformer.resolve_or_err("GCJ02")?;
/// let bd = transformer.resolve_or_err("BD09")?;
///
/// let pt = transformer.transform_point(&gcj, &bd, &point! { x: 116.397455, y: 39.909187 })?;
/// println!("{:?}", pt);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Transformer<S = ProjService> {
    exact: bool,
    sample_density: usize,
    hub: &'static Projection,
    service: S,
}

impl Transformer<ProjService> {
    /// Exact inverses, PROJ for standard systems, default sample density.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> TransformerBuilder<ProjService> {
        TransformerBuilder::new()
    }
}

impl Default for Transformer<ProjService> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GeodeticService> Transformer<S> {
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    pub fn sample_density(&self) -> usize {
        self.sample_density
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// The geodetic system routes between obfuscated and standard systems
    /// pass through.
    pub fn hub(&self) -> &'static Projection {
        self.hub
    }

    /// Resolves a code or numeric EPSG id; `None` if nothing knows it.
    pub fn resolve(&self, id: impl Into<SrsCode>) -> Option<Projection> {
        resolve_with(id, self.exact, &self.service)
    }

    /// [`resolve`](Self::resolve), with an unknown code as [`CrsError::UnknownCrs`].
    pub fn resolve_or_err(&self, id: impl Into<SrsCode>) -> Result<Projection, CrsError> {
        let code = id.into();
        let name = code.normalized();
        self.resolve(code).ok_or(CrsError::UnknownCrs(name))
    }

    pub fn transform_points(
        &self,
        src: &Projection,
        dst: &Projection,
        points: &[Coord<f64>],
    ) -> Result<Vec<Coord<f64>>, CrsError> {
        dispatch::transform_points(src, dst, points, self.hub, &self.service)
    }

    pub fn transform_point<C: Coordinate>(
        &self,
        src: &Projection,
        dst: &Projection,
        point: &C,
    ) -> Result<Point<f64>, CrsError> {
        let out = self.transform_points(src, dst, &[point.to_coord()])?;
        out.first().map(|c| Point(*c)).ok_or_else(|| {
            CrsError::DegenerateInput("transform returned no coordinates".to_string())
        })
    }

    pub fn transform_rect(
        &self,
        src: &Projection,
        dst: &Projection,
        rect: &Rect<f64>,
        sample_density: usize,
    ) -> Result<Rect<f64>, CrsError> {
        rect::transform_rect(src, dst, rect, sample_density, self.hub, &self.service)
    }

    /// [`transform_rect`](Self::transform_rect) at the configured density.
    pub fn transform_rect_default(
        &self,
        src: &Projection,
        dst: &Projection,
        rect: &Rect<f64>,
    ) -> Result<Rect<f64>, CrsError> {
        self.transform_rect(src, dst, rect, self.sample_density)
    }

    pub fn align_rect(&self, projection: &Projection, rect: &Rect<f64>) -> Rect<f64> {
        rect::align_rect(projection, rect)
    }

    pub fn geodetic_equivalent(&self, projection: &Projection) -> Projection {
        projection.geodetic_equivalent()
    }

    pub fn apply_geometry(
        &self,
        shape: &Shape,
        src: &Projection,
        dst: &Projection,
    ) -> Result<Shape, CrsError> {
        apply::apply_geometry(shape, src, dst, self.hub, &self.service)
    }

    pub fn apply_geo_geometry(
        &self,
        geom: &Geometry<f64>,
        src: &Projection,
        dst: &Projection,
    ) -> Result<Geometry<f64>, CrsError> {
        apply::apply_geo_geometry(geom, src, dst, self.hub, &self.service)
    }
}

#[derive(Debug)]
pub struct TransformerBuilder<S = ProjService> {
    exact: bool,
    sample_density: usize,
    service: S,
}

impl TransformerBuilder<ProjService> {
    pub fn new() -> Self {
        Self {
            exact: true,
            sample_density: DEFAULT_SAMPLE_DENSITY,
            service: ProjService,
        }
    }
}

impl Default for TransformerBuilder<ProjService> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: GeodeticService> TransformerBuilder<S> {
    /// Precision flag for GCJ02/BD09 resolved through this transformer.
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// Boundary sample count used by `transform_rect_default`.
    pub fn sample_density(mut self, sample_density: usize) -> Self {
        self.sample_density = sample_density;
        self
    }

    /// Swaps the service used for standard systems.
    pub fn service<T: GeodeticService>(self, service: T) -> TransformerBuilder<T> {
        TransformerBuilder {
            exact: self.exact,
            sample_density: self.sample_density,
            service,
        }
    }

    pub fn build(self) -> Transformer<S> {
        Transformer {
            exact: self.exact,
            sample_density: self.sample_density,
            hub: hub::wgs84(),
            service: self.service,
        }
    }
}
