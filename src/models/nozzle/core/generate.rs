//! Sampling a nozzle shape into an ordered contour.

use log::debug;
use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::meter,
};

use crate::support::isentropic::{Branch, FlowError, FlowState, area_mach};

use super::{
    Contour, ContourConfig, ContourPoint, FlowConditions, FlowRegime, NozzleSpec,
    shape::ContourShape,
};

/// Generates an ordered contour of `samples` stations for a nozzle shape.
///
/// Stations are spaced uniformly from the inlet to the exit. When the nozzle
/// has a convergent section and at least one interior station, the interior
/// station closest to the throat is moved onto it so the sonic point is always
/// part of the contour.
///
/// At each station the area ratio `A/A*` is inverted on the subsonic branch
/// upstream of the throat and on the supersonic branch from the throat on,
/// and the static state is derived from the inlet stagnation conditions.
///
/// # Errors
///
/// - [`FlowError::InvalidGeometry`] if `samples < 2` or the sampled area
///   profile is not strictly decreasing up to the throat and strictly
///   increasing after it.
/// - [`FlowError::InvalidInput`] for invalid shape parameters or configuration.
/// - Any error from [`area_mach::solve`] at a station.
pub fn generate<Shape>(
    shape: &Shape,
    spec: &NozzleSpec,
    samples: usize,
    flow: &FlowConditions,
    config: &ContourConfig,
) -> Result<Contour, FlowError>
where
    Shape: ContourShape + ?Sized,
{
    if samples < 2 {
        return Err(FlowError::invalid_geometry(format!(
            "a contour needs at least 2 samples, got {samples}"
        )));
    }
    shape.validate()?;
    config.solver.validate()?;
    config.regime.validate()?;

    let throat = spec.throat_position().get::<meter>();
    let positions = sample_positions(spec.length().get::<meter>(), throat, samples);
    let ratios: Vec<f64> = positions
        .iter()
        .map(|&x| area_ratio(shape, spec, x))
        .collect();

    check_single_throat(&positions, &ratios, throat)?;

    let throat_area = spec.throat_area().get::<square_meter>();
    let points = positions
        .iter()
        .zip(&ratios)
        .map(|(&x, &ratio)| -> Result<ContourPoint, FlowError> {
            let branch = if x < throat {
                Branch::Subsonic
            } else {
                Branch::Supersonic
            };
            let mach = area_mach::solve(flow.gas.gamma(), ratio, branch, &config.solver)?;
            let state = FlowState::from_stagnation(&flow.gas, &flow.stagnation, mach)?;
            let area = Area::new::<square_meter>(throat_area * ratio);

            Ok(ContourPoint {
                position: Length::new::<meter>(x),
                area,
                area_ratio: ratio,
                branch,
                regime: FlowRegime::classify(mach, &config.regime),
                state,
                wall: shape.wall_section(area),
            })
        })
        .collect::<Result<Vec<_>, FlowError>>()?;

    let throat_index = positions.iter().position(|&x| x == throat);

    debug!(
        "generated {} contour: {samples} stations, throat at x = {throat} m ({throat_index:?})",
        shape.name(),
    );

    Ok(Contour {
        shape: shape.name(),
        flow: *flow,
        throat_index,
        points,
    })
}

/// Uniform stations on `[0, length]`, with the throat snapped onto the
/// nearest interior station.
fn sample_positions(length: f64, throat: f64, samples: usize) -> Vec<f64> {
    let last = samples - 1;
    let step = length / last as f64;

    let mut positions: Vec<f64> = (0..samples).map(|i| step * i as f64).collect();
    positions[last] = length;

    if throat > 0.0 && samples >= 3 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let nearest = (throat / step).round() as usize;
        positions[nearest.clamp(1, last - 1)] = throat;
    }

    positions
}

/// Local area ratio `A/A*` at axial position `x`.
///
/// Computed from the radius ratio so the throat is exactly one and no station
/// falls below it through rounding.
fn area_ratio<Shape: ContourShape + ?Sized>(shape: &Shape, spec: &NozzleSpec, x: f64) -> f64 {
    let r_t = spec.throat_radius().get::<meter>();
    let throat = spec.throat_position().get::<meter>();

    let radius = if x < throat {
        let r_i = spec.inlet_radius().get::<meter>();
        r_i + (r_t - r_i) * (x / throat)
    } else {
        let r_e = spec.exit_radius().get::<meter>();
        let xi = ((x - throat) / spec.divergent_length().get::<meter>()).clamp(0.0, 1.0);
        r_t + (r_e - r_t) * shape.divergent_profile(xi)
    };

    let scale = radius / r_t;
    scale * scale
}

/// Requires a strictly decreasing area ratio up to the throat and a strictly
/// increasing one after it.
fn check_single_throat(positions: &[f64], ratios: &[f64], throat: f64) -> Result<(), FlowError> {
    for i in 1..positions.len() {
        let (prev, next) = (ratios[i - 1], ratios[i]);

        let ok = if positions[i] <= throat {
            next < prev
        } else if positions[i - 1] >= throat {
            next > prev
        } else {
            // The pair straddles an unsampled throat.
            true
        };

        if !ok {
            return Err(FlowError::invalid_geometry(format!(
                "area profile is not monotonic between x = {} m and x = {} m \
                 (A/A* {prev} -> {next}); a second throat would form",
                positions[i - 1],
                positions[i],
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::nozzle::core::{
        Bell, Elliptic, NozzleShape, WallSection,
        test_support::{air_chamber, reference_spec},
    };

    #[test]
    fn reference_contour() -> Result<(), FlowError> {
        let spec = reference_spec();
        let contour = generate(
            &NozzleShape::default(),
            &spec,
            50,
            &air_chamber(),
            &ContourConfig::default(),
        )?;

        assert_eq!(contour.len(), 50);
        assert!(
            contour
                .points
                .windows(2)
                .all(|pair| pair[1].position > pair[0].position)
        );
        assert_relative_eq!(contour.points[0].position.get::<meter>(), 0.0);
        assert_relative_eq!(contour.points[49].position.get::<meter>(), 1.0);

        let min = contour.min_area_point().expect("contour is not empty");
        assert_relative_eq!(min.mach(), 1.0, max_relative = 1e-8);
        assert_eq!(Some(min), contour.throat());
        assert_relative_eq!(
            min.position.get::<meter>(),
            spec.throat_position().get::<meter>()
        );

        Ok(())
    }

    #[test]
    fn mach_rises_monotonically_through_the_nozzle() -> Result<(), FlowError> {
        let contour = generate(
            &NozzleShape::default(),
            &reference_spec(),
            40,
            &air_chamber(),
            &ContourConfig::default(),
        )?;

        assert!(
            contour
                .points
                .windows(2)
                .all(|pair| pair[1].mach() > pair[0].mach())
        );

        let exit = contour.exit().expect("contour is not empty");
        let expected = area_mach::solve(1.4, 5.0, Branch::Supersonic, &Default::default())?;
        assert_relative_eq!(exit.area_ratio, 5.0, max_relative = 1e-12);
        assert_relative_eq!(exit.mach(), expected, max_relative = 1e-6);
        assert_eq!(exit.regime, FlowRegime::Supersonic);
        assert_eq!(contour.points[0].branch, Branch::Subsonic);

        Ok(())
    }

    #[test]
    fn all_shapes_share_the_flow_contract() -> Result<(), FlowError> {
        let spec = reference_spec();
        let flow = air_chamber();
        let config = ContourConfig::default();

        for shape in [
            NozzleShape::default(),
            Elliptic::default().into(),
            Bell::default().into(),
        ] {
            let contour = generate(&shape, &spec, 25, &flow, &config)?;
            let throat = contour.throat().expect("throat is sampled");

            assert_eq!(throat.mach(), 1.0);
            assert_relative_eq!(
                contour.exit().expect("contour is not empty").area_ratio,
                spec.expansion_ratio(),
                max_relative = 1e-12
            );
        }

        Ok(())
    }

    #[test]
    fn elliptic_wall_does_not_change_the_flow() -> Result<(), FlowError> {
        let spec = reference_spec();
        let flow = air_chamber();
        let config = ContourConfig::default();

        let conical = generate(&NozzleShape::default(), &spec, 30, &flow, &config)?;
        let lobed = generate(&Elliptic::default(), &spec, 30, &flow, &config)?;

        for (a, b) in conical.iter().zip(lobed.iter()) {
            assert_eq!(a.state, b.state);
            assert!(matches!(a.wall, WallSection::Circular { .. }));
            assert!(matches!(b.wall, WallSection::Lobed { .. }));
        }

        Ok(())
    }

    #[test]
    fn bell_expands_faster_than_cone_near_throat() -> Result<(), FlowError> {
        let spec = reference_spec();
        let flow = air_chamber();
        let config = ContourConfig::default();

        let cone = generate(&NozzleShape::default(), &spec, 30, &flow, &config)?;
        let bell = generate(&Bell::default(), &spec, 30, &flow, &config)?;

        let after_throat = cone.throat_index.expect("throat is sampled") + 1;
        assert!(bell.points[after_throat].mach() > cone.points[after_throat].mach());

        Ok(())
    }

    #[test]
    fn throat_at_inlet_is_fully_supersonic() -> Result<(), FlowError> {
        let spec = reference_spec().with_inlet_area(Area::new::<square_meter>(0.1))?;
        let contour = generate(
            &NozzleShape::default(),
            &spec,
            10,
            &air_chamber(),
            &ContourConfig::default(),
        )?;

        assert_eq!(contour.throat_index, Some(0));
        assert!(contour.iter().all(|p| p.branch == Branch::Supersonic));

        Ok(())
    }

    #[test]
    fn samples_extreme_contraction() -> Result<(), FlowError> {
        // Inlet A/A* of 1e6 lies beyond the subsonic floor's area ratio.
        let spec = NozzleSpec::new(
            Area::new::<square_meter>(1e-6),
            Area::new::<square_meter>(1.0),
            Length::new::<meter>(10.0),
        )?;

        for samples in [2, 7, 1000] {
            let contour = generate(
                &NozzleShape::default(),
                &spec,
                samples,
                &air_chamber(),
                &ContourConfig::default(),
            )?;

            let inlet = &contour.points[0];
            assert_eq!(inlet.branch, Branch::Subsonic);
            assert_relative_eq!(inlet.area_ratio, 1e6, max_relative = 1e-9);
            assert!(inlet.mach() < 1e-6);
        }

        Ok(())
    }

    #[test]
    fn two_samples_skip_the_throat() -> Result<(), FlowError> {
        let contour = generate(
            &NozzleShape::default(),
            &reference_spec(),
            2,
            &air_chamber(),
            &ContourConfig::default(),
        )?;

        assert_eq!(contour.len(), 2);
        assert_eq!(contour.throat_index, None);
        assert!(contour.points[0].mach() < 1.0);
        assert!(contour.points[1].mach() > 1.0);

        Ok(())
    }

    #[test]
    fn rejects_too_few_samples() {
        for samples in [0, 1] {
            assert!(matches!(
                generate(
                    &NozzleShape::default(),
                    &reference_spec(),
                    samples,
                    &air_chamber(),
                    &ContourConfig::default(),
                ),
                Err(FlowError::InvalidGeometry { .. })
            ));
        }
    }

    #[test]
    fn rejects_invalid_shape_parameters() {
        let shape = Elliptic {
            lobes: 0,
            ..Elliptic::default()
        };

        assert!(matches!(
            generate(
                &shape,
                &reference_spec(),
                10,
                &air_chamber(),
                &ContourConfig::default(),
            ),
            Err(FlowError::InvalidInput { .. })
        ));
    }

    #[test]
    fn snaps_throat_onto_interior_station() {
        let positions = sample_positions(1.0, 0.33, 11);

        assert_eq!(positions.len(), 11);
        assert_eq!(positions[3], 0.33);
        assert!(positions.windows(2).all(|pair| pair[1] > pair[0]));

        // A throat next to the inlet still lands on an interior station.
        let positions = sample_positions(1.0, 0.01, 5);
        assert_eq!(positions[0], 0.0);
        assert_eq!(positions[1], 0.01);
    }

    #[test]
    fn detects_a_second_throat() {
        let positions = [0.0, 0.25, 0.5, 0.75, 1.0];

        assert!(check_single_throat(&positions, &[3.0, 2.0, 1.0, 2.0, 3.0], 0.5).is_ok());
        assert!(matches!(
            check_single_throat(&positions, &[3.0, 2.0, 1.0, 2.0, 1.5], 0.5),
            Err(FlowError::InvalidGeometry { .. })
        ));
        assert!(matches!(
            check_single_throat(&positions, &[3.0, 3.0, 1.0, 2.0, 3.0], 0.5),
            Err(FlowError::InvalidGeometry { .. })
        ));
    }
}
