//! Split-pot awards, 3.0 rules
//!
//! Total party XP pot by (average party level, CR), from the published
//! 3.0 table, with a stepped extrapolation for cells off the table.

/// One APL row: pot values for a contiguous CR band starting at `first_cr`
struct PotRow {
    first_cr: i32,
    pots: &'static [i64],
}

/// Published pot table, APL 1-40. Row bands are asymmetric around the APL,
/// following the source material; the APL 9 row really does hold a 0 at CR 1.
#[rustfmt::skip]
const POT_TABLE_30: [PotRow; 40] = [
    PotRow { first_cr: 1, pots: &[300, 600, 900, 1350, 1800, 2700, 3600, 5400, 7200, 10800] },
    PotRow { first_cr: 1, pots: &[300, 600, 900, 1350, 1800, 2700, 3600, 5400, 7200, 10800] },
    PotRow { first_cr: 1, pots: &[300, 600, 900, 1350, 1800, 2700, 3600, 5400, 7200, 10800] },
    PotRow { first_cr: 1, pots: &[300, 600, 800, 1200, 1600, 2400, 3200, 4800, 6400, 9600, 12800, 18000, 21600, 28800] },
    PotRow { first_cr: 1, pots: &[300, 500, 750, 1000, 1500, 2250, 3000, 4500, 6000, 9000, 12000, 18000, 21600, 28800, 28800] },
    PotRow { first_cr: 1, pots: &[300, 450, 600, 900, 1200, 1800, 2400, 3600, 4800, 7200, 10800, 14400, 21600, 25200, 28800, 28800] },
    PotRow { first_cr: 1, pots: &[263, 394, 525, 700, 1050, 1400, 2100, 3150, 4200, 6300, 8400, 12600, 16800, 25200, 28800] },
    PotRow { first_cr: 1, pots: &[200, 300, 450, 600, 875, 1200, 1600, 2400, 3600, 4800, 6300, 8400, 12600, 16800, 25200, 28800] },
    PotRow { first_cr: 1, pots: &[0, 225, 338, 506, 675, 1013, 1350, 2025, 2700, 4050, 5400, 8100, 10800, 16200, 21600, 32400, 36000, 39600] },
    PotRow { first_cr: 3, pots: &[250, 375, 563, 750, 1000, 1500, 2000, 3000, 3600, 4800, 6400, 9600] },
    PotRow { first_cr: 4, pots: &[275, 413, 619, 825, 1238, 1650, 2475, 3300, 4950, 6600, 9900, 13200, 17600, 26400, 39600] },
    PotRow { first_cr: 5, pots: &[300, 450, 675, 900, 1350, 1800, 1950, 2600, 3900, 5850, 7800, 11700, 15600, 23400, 31200, 46800] },
    PotRow { first_cr: 6, pots: &[325, 488, 731, 975, 1463, 1400, 2100, 2800, 4200, 6300, 8400, 12600, 18900, 25200, 33600] },
    PotRow { first_cr: 6, pots: &[350, 525, 788, 1050, 1575, 900, 1200, 1800, 2400, 4200, 4800, 7200, 10800, 13500, 18900] },
    PotRow { first_cr: 7, pots: &[375, 563, 844, 1125, 638, 850, 1275, 1900, 2500, 4800, 7200, 10800, 13500, 18900] },
    PotRow { first_cr: 7, pots: &[400, 600, 900, 1350, 900, 1200, 1800, 2400, 3200, 4800, 7200, 10800, 14400, 19200] },
    PotRow { first_cr: 8, pots: &[425, 638, 956, 900, 1200, 1800, 2400, 3200, 4800, 7200, 10800, 14400, 19200] },
    PotRow { first_cr: 8, pots: &[450, 675, 1013, 638, 850, 1275, 1900, 2500, 4800, 7200, 10800, 14400, 19200] },
    PotRow { first_cr: 9, pots: &[475, 713, 638, 850, 1275, 1900, 2500, 4800, 7200, 10800, 14400, 19200] },
    PotRow { first_cr: 10, pots: &[750, 900, 1200, 1800, 2400, 3200, 4800, 7200, 10800, 14400, 19200] },
    PotRow { first_cr: 11, pots: &[1125, 1350, 1800, 2700, 3600, 4800, 7200, 10800, 14400, 21600, 28800, 43200, 57600, 76800] },
    PotRow { first_cr: 12, pots: &[1688, 2025, 2700, 4050, 5400, 7200, 10800, 16200, 21600, 32400, 43200, 64800, 86400, 115200] },
    PotRow { first_cr: 13, pots: &[2250, 2700, 3600, 5400, 7200, 9600, 14400, 21600, 28800, 43200, 57600, 86400, 115200, 153600] },
    PotRow { first_cr: 14, pots: &[3000, 3600, 4800, 7200, 9600, 12800, 19200, 28800, 38400, 57600, 76800, 115200, 153600, 204800] },
    PotRow { first_cr: 15, pots: &[4500, 5400, 7200, 10800, 14400, 19200, 28800, 43200, 57600, 86400, 115200, 172800, 230400, 307200] },
    PotRow { first_cr: 16, pots: &[6750, 8100, 10800, 16200, 21600, 28800, 43200, 64800, 86400, 129600, 172800, 259200, 345600, 460800] },
    PotRow { first_cr: 17, pots: &[9000, 10800, 14400, 21600, 28800, 38400, 57600, 86400, 115200, 172800, 230400, 345600, 460800, 614400] },
    PotRow { first_cr: 18, pots: &[12000, 14400, 19200, 28800, 38400, 51200, 76800, 115200, 153600, 230400, 307200, 460800, 614400, 819200] },
    PotRow { first_cr: 19, pots: &[18000, 21600, 28800, 43200, 57600, 76800, 115200, 172800, 230400, 345600, 460800, 691200, 921600, 1228800] },
    PotRow { first_cr: 20, pots: &[27000, 32400, 43200, 64800, 86400, 115200, 172800, 259200, 345600, 518400, 691200, 1036800, 1382400, 1843200] },
    PotRow { first_cr: 21, pots: &[36000, 43200, 57600, 86400, 115200, 153600, 230400, 345600, 460800, 691200, 921600, 1382400, 1843200, 2457600] },
    PotRow { first_cr: 22, pots: &[48000, 57600, 76800, 115200, 153600, 204800, 307200, 460800, 614400, 921600, 1228800, 1843200, 2457600, 3276800] },
    PotRow { first_cr: 23, pots: &[72000, 86400, 115200, 172800, 230400, 307200, 460800, 691200, 921600, 1382400, 1843200, 2764800, 3686400, 4915200] },
    PotRow { first_cr: 24, pots: &[108000, 129600, 172800, 259200, 345600, 460800, 691200, 1036800, 1382400, 2073600, 2764800, 4147200, 5529600, 7372800] },
    PotRow { first_cr: 25, pots: &[144000, 172800, 230400, 345600, 460800, 614400, 921600, 1382400, 1843200, 2764800, 3686400, 5529600, 7372800, 9830400] },
    PotRow { first_cr: 26, pots: &[192000, 230400, 307200, 460800, 614400, 819200, 1228800, 1843200, 2457600, 3686400, 4915200, 7372800, 9830400, 13107200] },
    PotRow { first_cr: 27, pots: &[288000, 345600, 460800, 691200, 921600, 1228800, 1843200, 2764800, 3686400, 5529600, 7372800, 11059200, 14745600, 19660800] },
    PotRow { first_cr: 28, pots: &[432000, 518400, 691200, 1036800, 1382400, 1843200, 2764800, 4147200, 5529600, 8294400, 11059200, 16588800, 22118400] },
    PotRow { first_cr: 29, pots: &[576000, 691200, 921600, 1382400, 1843200, 2457600, 3686400, 5529600, 7372800, 11059200, 14745600, 22118400] },
    PotRow { first_cr: 30, pots: &[768000, 921600, 1228800, 1843200, 2457600, 3276800, 4915200, 7372800, 9830400, 14745600, 19660800] },
];

/// Total party pot for an encounter of `cr` against a party of `apl`.
///
/// APL clamps to 1-40 and CR to at least 1. Exact table cells win; a miss
/// extrapolates from the CR == APL baseline with the alternating stepped
/// multipliers. Never returns below 0.
pub fn get_pot30(apl: i32, cr: i32) -> i64 {
    let apl = apl.clamp(1, 40);
    let cr = cr.max(1);

    let row = &POT_TABLE_30[(apl - 1) as usize];
    let idx = cr - row.first_cr;
    if idx >= 0 {
        if let Some(&pot) = row.pots.get(idx as usize) {
            return pot;
        }
    }

    log::warn!(
        "No published pot for APL {} vs CR {}, extrapolating from baseline",
        apl,
        cr
    );

    let mut pot = base_pot30(apl) as f64;
    let diff = cr - apl;
    if diff > 0 {
        // Higher CR: alternating x3/2 and x4/3, floored each step
        for step in 0..diff {
            pot = (pot * if step % 2 == 0 { 1.5 } else { 4.0 / 3.0 }).floor();
        }
    } else {
        // Lower CR: alternating x2/3 and x3/4, floored each step
        for step in 0..-diff {
            pot = (pot * if step % 2 == 0 { 2.0 / 3.0 } else { 3.0 / 4.0 }).floor();
        }
    }

    (pot as i64).max(0)
}

/// Baseline pot where CR equals APL.
///
/// Simple 300 x level through 11, irregular published values at 12-15,
/// then a repeating x1.5, x1.5, x4/3, x4/3 ladder from 4800 at 16.
pub fn base_pot30(apl: i32) -> i64 {
    let apl = apl.clamp(1, 40);
    if apl <= 11 {
        return 300 * apl as i64;
    }
    match apl {
        12 => 2600,
        13 => 2800,
        14 => 2400,
        15 => 2500,
        _ => {
            const PATTERN: [f64; 4] = [1.5, 1.5, 4.0 / 3.0, 4.0 / 3.0];
            let mut pot = 4800.0_f64;
            for level in 17..=apl {
                pot = (pot * PATTERN[((level - 17) % 4) as usize]).floor();
            }
            pot as i64
        }
    }
}

/// Proportional share of a pot.
///
/// In encounter use every earner carries weight 1, making this an even
/// split, but the primitive supports arbitrary weighting.
pub fn split30(pot: i64, weight: f64, total_weight: f64) -> i64 {
    if pot <= 0 || total_weight <= 0.0 {
        return 0;
    }
    (pot as f64 * weight / total_weight).round() as i64
}
