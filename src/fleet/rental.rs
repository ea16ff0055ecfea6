use std::io::{BufRead, Write};

use anyhow::Result;

use super::selector::VehicleKind;
use super::vehicle::{Fleet, RentalQuote};
use crate::console::Console;
use crate::output::{format_quote_json, format_rental_quote, format_vehicle_menu, WELCOME_BANNER};

/// What the customer already told us up front. Anything left as `None` is
/// asked for on the console.
#[derive(Debug, Clone, Copy, Default)]
pub struct RentalRequest {
    pub vehicle: Option<VehicleKind>,
    pub days: Option<i64>,
    pub json: bool,
}

/// Run one rental: pick a vehicle, ask for the days, print the quote.
pub fn run_rental<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    fleet: &Fleet,
    request: RentalRequest,
    use_colors: bool,
) -> Result<RentalQuote> {
    let kind = match request.vehicle {
        Some(kind) => kind,
        None => {
            console.say(&format!("{} \n", WELCOME_BANNER))?;
            console.say(&format_vehicle_menu())?;
            console.select_vehicle()?
        }
    };
    let days = match request.days {
        Some(days) => days,
        None => console.read_days()?,
    };

    let quote = fleet.get(kind).quote(days);
    if request.json {
        console.say(&format_quote_json(&quote)?)?;
    } else {
        console.say(&format_rental_quote(&quote, use_colors))?;
    }

    Ok(quote)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::{InputClosed, DAYS_PROMPT};
    use std::io::Cursor;

    fn rent(input: &str, request: RentalRequest) -> (Result<RentalQuote>, String) {
        let mut out = Vec::new();
        let result = {
            let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), &mut out);
            run_rental(&mut console, &Fleet::new(), request, false)
        };
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_interactive_rental_with_reprompt() {
        let (result, output) = rent("99\n2\n3\n", RentalRequest::default());

        let quote = result.unwrap();
        assert_eq!(quote.vehicle, "SUV");
        assert_eq!(quote.total_cost, 630.0);

        let banner = output.find(WELCOME_BANNER).unwrap();
        let menu = output.find("Type 1 for: \"Car\"").unwrap();
        let rejected = output.find("99 not recognized.").unwrap();
        let days = output.find(DAYS_PROMPT).unwrap();
        let report = output.find("SUV Chosen!").unwrap();
        assert!(banner < menu && menu < rejected && rejected < days && days < report);

        assert!(output.ends_with("Total Rental Cost: KES630.00 for 3 days.\n"));
    }

    #[test]
    fn test_rental_from_flags_skips_prompts() {
        let request = RentalRequest {
            vehicle: Some(VehicleKind::Truck),
            days: Some(2),
            json: false,
        };
        let (result, output) = rent("", request);

        assert_eq!(result.unwrap().total_cost, 500.0);
        assert_eq!(output, "Truck Chosen! \nTotal Rental Cost: KES500.00 for 2 days.\n");
    }

    #[test]
    fn test_rental_json_output() {
        let request = RentalRequest {
            vehicle: Some(VehicleKind::Car),
            days: Some(1),
            json: true,
        };
        let (_, output) = rent("", request);

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["vehicle"], "Car");
        assert_eq!(parsed["total_cost"], 80.0);
    }

    #[test]
    fn test_rental_input_closed_before_days() {
        let (result, _) = rent("1\n", RentalRequest::default());
        assert!(result.unwrap_err().is::<InputClosed>());
    }
}
