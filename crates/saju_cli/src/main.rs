use clap::{Parser, Subcommand};
use saju_astro::apparent_solar_longitude_deg;
use saju_chart::{
    BirthInput, Chart, ChartCalculator, ChartConfig, Gender, InputCalendar, SEOUL_LONGITUDE_DEG,
    TermPhase,
};
use saju_ganji::{ALL_STEMS, Pillar, Stem, day_pillar, day_pillar_for_date};
use saju_jeolgi::{SolarTerm, TermCalculator};
use saju_luck::{day_luck, decade_luck, month_luck, year_luck};
use saju_time::{
    CivilDate, CivilDateTime, correction_detail, describe_timezone, equation_of_time_minutes,
    wall_clock_utc_offset_min, wall_to_true_solar,
};

#[derive(Parser)]
#[command(name = "saju", about = "Korean four-pillars calendar CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a birth chart with its pattern and decade luck
    Chart {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (hh:mm or hh:mm:ss)
        #[arg(long)]
        time: String,
        /// Gender: male or female
        #[arg(long)]
        gender: String,
        /// Birth city preset for the longitude
        #[arg(long, default_value = "seoul")]
        city: String,
        /// Birth longitude in degrees east (overrides --city)
        #[arg(long)]
        longitude: Option<f64>,
        /// Treat the date as a lunar-calendar date
        #[arg(long)]
        lunar: bool,
        /// The lunar month is the leap month
        #[arg(long)]
        leap_month: bool,
        /// Skip the true-solar-time correction
        #[arg(long)]
        no_correction: bool,
        /// Number of decade-luck pillars
        #[arg(long, default_value = "8")]
        decades: usize,
    },
    /// List the solar terms of a year in Korean wall time
    Terms {
        /// Calendar year
        year: i32,
        /// All 24 terms instead of the 12 sectional ones
        #[arg(long)]
        all: bool,
    },
    /// Describe the Korean civil-time rules on a date
    Timezone {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// Convert a wall-clock reading to true solar time
    SolarTime {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time (hh:mm or hh:mm:ss)
        #[arg(long)]
        time: String,
        /// City preset for the longitude
        #[arg(long, default_value = "seoul")]
        city: String,
        /// Longitude in degrees east (overrides --city)
        #[arg(long)]
        longitude: Option<f64>,
        /// Skip the equation-of-time term
        #[arg(long)]
        no_eot: bool,
    },
    /// Apparent solar longitude at a wall-clock instant
    Sun {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Time (hh:mm or hh:mm:ss)
        #[arg(long)]
        time: String,
    },
    /// Sexagenary day pillar of a date
    DayPillar {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Time, for the 23:00 rollover (default noon)
        #[arg(long, default_value = "12:00")]
        time: String,
    },
    /// Year-luck pillars from a starting year
    LuckYears {
        /// First calendar year
        year: i32,
        /// Number of years
        #[arg(long, default_value = "10")]
        count: usize,
    },
    /// Month-luck table of a calendar year
    LuckMonths {
        /// Calendar year
        year: i32,
    },
    /// Day-luck pillars over a span of days
    LuckDays {
        /// First date (YYYY-MM-DD)
        #[arg(long)]
        from: String,
        /// Number of days
        #[arg(long, default_value = "10")]
        days: u32,
        /// Natal day stem to relate against (e.g. Byeong)
        #[arg(long)]
        day_stem: Option<String>,
    },
}

fn parse_date(s: &str) -> Result<CivilDate, String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s}"));
    }
    let year: i32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let month: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let day: u32 = parts[2].parse().map_err(|e| format!("{e}"))?;
    CivilDate::new(year, month, day).map_err(|e| format!("{e}"))
}

fn parse_time(s: &str) -> Result<(u32, u32, u32), String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 2 && parts.len() != 3 {
        return Err(format!("expected hh:mm or hh:mm:ss, got {s}"));
    }
    let hour: u32 = parts[0].parse().map_err(|e| format!("{e}"))?;
    let minute: u32 = parts[1].parse().map_err(|e| format!("{e}"))?;
    let second: u32 = if parts.len() == 3 {
        parts[2].parse().map_err(|e| format!("{e}"))?
    } else {
        0
    };
    Ok((hour, minute, second))
}

fn require_date(s: &str) -> CivilDate {
    parse_date(s).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_datetime(date: &str, time: &str) -> CivilDateTime {
    let d = require_date(date);
    let (hour, minute, second) = parse_time(time).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    CivilDateTime::new(d.year, d.month, d.day, hour, minute, second).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn parse_gender(s: &str) -> Gender {
    match s.to_lowercase().as_str() {
        "male" | "m" | "man" => Gender::Male,
        "female" | "f" | "woman" => Gender::Female,
        _ => {
            eprintln!("Invalid gender: {s}");
            eprintln!("Valid: male, female");
            std::process::exit(1);
        }
    }
}

fn city_longitude_deg(city: &str) -> f64 {
    match city.to_lowercase().as_str() {
        "seoul" => SEOUL_LONGITUDE_DEG,
        "busan" => 129.0756,
        "daegu" => 128.6014,
        "incheon" => 126.7052,
        "gwangju" => 126.8526,
        "daejeon" => 127.3845,
        "ulsan" => 129.3114,
        "jeju" => 126.5312,
        _ => {
            eprintln!("Unknown city: {city}");
            eprintln!("Valid: seoul, busan, daegu, incheon, gwangju, daejeon, ulsan, jeju");
            std::process::exit(1);
        }
    }
}

fn resolve_longitude(city: &str, longitude: Option<f64>) -> f64 {
    longitude.unwrap_or_else(|| city_longitude_deg(city))
}

fn parse_day_stem(s: &str) -> Stem {
    ALL_STEMS
        .iter()
        .copied()
        .find(|stem| stem.romanized().eq_ignore_ascii_case(s))
        .unwrap_or_else(|| {
            eprintln!("Invalid day stem: {s}");
            eprintln!("Valid: Gap, Eul, Byeong, Jeong, Mu, Gi, Gyeong, Sin, Im, Gye");
            std::process::exit(1);
        })
}

fn chart_calculator(longitude_deg: f64, no_correction: bool) -> ChartCalculator {
    let config = ChartConfig {
        longitude_deg,
        apply_solar_correction: !no_correction,
    };
    ChartCalculator::new(config).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn fmt_dt(at: CivilDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
        at.year, at.month, at.day, at.hour, at.minute, at.second
    )
}

fn fmt_date(d: CivilDate) -> String {
    format!("{:04}-{:02}-{:02}", d.year, d.month, d.day)
}

fn fmt_pillar(p: Pillar) -> String {
    format!("{} ({})", p.korean(), p.romanized())
}

fn print_chart(chart: &Chart) {
    println!("Wall clock: {}", fmt_dt(chart.wall));
    println!("Basis:      {}", fmt_dt(chart.basis));
    println!("Pillars:");
    println!("  Year:  {}", fmt_pillar(chart.pillars.year));
    println!("  Month: {}", fmt_pillar(chart.pillars.month));
    println!("  Day:   {}", fmt_pillar(chart.pillars.day));
    println!("  Hour:  {}", fmt_pillar(chart.pillars.hour));
    println!(
        "Term start: {} (day {} of the month)",
        fmt_dt(chart.term_start),
        chart.days_into_term
    );
    println!("Mid term:   {}", fmt_dt(chart.term_mid));
    println!(
        "Pattern: {} - {}",
        chart.pattern.pattern.korean(),
        chart.pattern.rationale
    );
    let phase = match chart.governing.phase {
        TermPhase::Early => "early",
        TermPhase::Late => "late",
    };
    println!(
        "Governing stem: {} ({} phase)",
        chart.governing.stem.romanized(),
        phase
    );
    println!(
        "Seasonal command: {} ({} to {})",
        chart.seasonal.mission.romanized(),
        chart.seasonal.from.romanized(),
        chart.seasonal.until.romanized()
    );
    if let Some(term) = &chart.warnings.term {
        println!(
            "Warning: {:.0} min from {} at {}",
            term.minutes,
            term.term.korean(),
            fmt_dt(term.instant)
        );
    }
    if let Some(hour) = &chart.warnings.hour {
        println!(
            "Warning: {} min from the {:02}:{:02} hour boundary",
            hour.minutes,
            hour.boundary_min / 60,
            hour.boundary_min % 60
        );
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            date,
            time,
            gender,
            city,
            longitude,
            lunar,
            leap_month,
            no_correction,
            decades,
        } => {
            let wall = require_datetime(&date, &time);
            let gender = parse_gender(&gender);
            let lon = resolve_longitude(&city, longitude);
            let mut calc = chart_calculator(lon, no_correction);

            let mut input = BirthInput {
                year: wall.year,
                month: wall.month,
                day: wall.day,
                hour: wall.hour,
                minute: wall.minute,
                second: wall.second,
                calendar: InputCalendar::Solar,
            };
            if lunar {
                input.calendar = InputCalendar::Lunar { leap_month };
            }

            let chart = calc.chart(&input, None).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            print_chart(&chart);

            let luck = decade_luck(&mut calc, &chart, gender, decades).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            let direction = if luck.forward { "forward" } else { "backward" };
            println!("Decade luck ({direction}, first at age {}):", luck.start_age);
            for entry in &luck.entries {
                println!("  age {:>3}: {}", entry.start_age, fmt_pillar(entry.pillar));
            }
        }

        Commands::Terms { year, all } => {
            let mut terms = TermCalculator::new();
            if all {
                let table = terms.full(year).unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
                let mut entries = *table.entries();
                entries.sort_by_key(|&(_, wall)| wall);
                for (term, wall) in entries {
                    println!("{}  {} ({})", fmt_dt(wall), term.korean(), term.romanized());
                }
            } else {
                let table = terms.sectional(year).unwrap_or_else(|e| {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                });
                println!(
                    "{}  {} ({}, prior year)",
                    fmt_dt(table.previous_daeseol),
                    SolarTerm::Daeseol.korean(),
                    SolarTerm::Daeseol.romanized()
                );
                let mut entries = *table.entries();
                entries.sort_by_key(|&(_, wall)| wall);
                for (term, wall) in entries {
                    println!("{}  {} ({})", fmt_dt(wall), term.korean(), term.romanized());
                }
            }
        }

        Commands::Timezone { date } => {
            let info = describe_timezone(require_date(&date));
            println!("{}: {}", fmt_date(info.date), info.label);
            println!(
                "  Offset: {} (meridian {:.1} deg)",
                info.utc_string(),
                info.meridian_deg
            );
            if info.dst_active {
                println!("  Daylight saving active: +{} min", info.dst_advance_min);
            }
        }

        Commands::SolarTime {
            date,
            time,
            city,
            longitude,
            no_eot,
        } => {
            let wall = require_datetime(&date, &time);
            let lon = resolve_longitude(&city, longitude);
            let solar = wall_to_true_solar(wall, lon, !no_eot);
            let detail = correction_detail(wall.date(), lon);
            println!("Wall clock: {} ({})", fmt_dt(wall), detail.era_label);
            println!("True solar: {}", fmt_dt(solar));
            println!(
                "  Longitude term: {:+.1} min (meridian {:.1} deg, site {:.4} deg)",
                detail.longitude_minutes, detail.meridian_deg, detail.longitude_deg
            );
            if detail.dst_active {
                println!("  Daylight term: {:+} min", detail.dst_minutes);
            }
            if !no_eot {
                let utc = wall.add_minutes(-(wall_clock_utc_offset_min(wall.date()) as i64));
                println!(
                    "  Equation of time: {:+.2} min",
                    equation_of_time_minutes(utc.date())
                );
            }
        }

        Commands::Sun { date, time } => {
            let wall = require_datetime(&date, &time);
            let utc = wall.add_minutes(-(wall_clock_utc_offset_min(wall.date()) as i64));
            let lon = apparent_solar_longitude_deg(utc.to_epoch_seconds());
            println!("Apparent solar longitude: {lon:.4} deg");

            let mut terms = TermCalculator::new();
            match terms.nearby(wall) {
                Ok((prev, next)) => {
                    if let Some(ti) = prev {
                        println!("  Last term: {} at {}", ti.term.korean(), fmt_dt(ti.wall));
                    }
                    if let Some(ti) = next {
                        println!("  Next term: {} at {}", ti.term.korean(), fmt_dt(ti.wall));
                    }
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::DayPillar { date, time } => {
            let at = require_datetime(&date, &time);
            println!("{}  {}", fmt_dt(at), fmt_pillar(day_pillar(at)));
        }

        Commands::LuckYears { year, count } => {
            for entry in year_luck(year, count) {
                println!("{}  {}", entry.year, fmt_pillar(entry.pillar));
            }
        }

        Commands::LuckMonths { year } => {
            let mut calc = chart_calculator(SEOUL_LONGITUDE_DEG, true);
            let months = month_luck(&mut calc, year).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });
            for m in months {
                println!(
                    "{:>2}. {}  {} {} (mid {}, ends {})",
                    m.month,
                    fmt_pillar(m.pillar),
                    m.term.korean(),
                    fmt_dt(m.enters),
                    fmt_dt(m.mid),
                    fmt_dt(m.ends)
                );
            }
        }

        Commands::LuckDays {
            from,
            days,
            day_stem,
        } => {
            let start_date = require_date(&from);
            match day_stem {
                Some(s) => {
                    let stem = parse_day_stem(&s);
                    let start = CivilDateTime::from_date_time(start_date, 0, 0, 0);
                    let end = start.add_days(days as i64);
                    for d in day_luck(start, end, stem) {
                        println!(
                            "{}  {}  {} / {}",
                            fmt_date(d.date),
                            fmt_pillar(d.pillar),
                            d.stem_god.korean(),
                            d.branch_god.korean()
                        );
                    }
                }
                None => {
                    for i in 0..days as i64 {
                        let date = start_date.add_days(i);
                        println!("{}  {}", fmt_date(date), fmt_pillar(day_pillar_for_date(date)));
                    }
                }
            }
        }
    }
}
