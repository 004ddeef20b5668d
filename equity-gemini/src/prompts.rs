//! Prompt text sent to the Gemini models.

use equity_core::PropertyAddress;
use equity_core::calculations::common::format_currency;

pub fn market_insight(
    new_home_price: f64,
    new_monthly_payment: f64,
) -> String {
    format!(
        "You are a helpful real estate assistant for an agent in Manitowoc, Wisconsin. \
A client is considering upgrading their home.

Their desired new home price is {price}.
Their estimated new total monthly housing payment (principal, interest, taxes, and insurance) would be {payment}.

Please provide a brief, optimistic, and encouraging analysis (2-3 short paragraphs) for this client. \
Touch upon the benefits of homeownership and investing in a new property. \
Mention the local context of Manitowoc, WI in a positive light if possible, but keep it general. \
Do not give financial advice. Frame the new monthly payment as an investment in their future. \
Respond in markdown format.",
        price = format_currency(new_home_price),
        payment = format_currency(new_monthly_payment),
    )
}

pub fn house_image(new_home_price: f64) -> String {
    format!(
        "A beautiful, modern single-family home in Manitowoc County, Wisconsin. \
The exterior of a house that would sell for around {}. \
The photo is taken on a sunny day, showcasing the property's curb appeal. \
Professional real estate photography style.",
        format_currency(new_home_price)
    )
}

/// Asks for a bare number so the reply can be parsed without a schema.
pub fn home_value(address: &PropertyAddress) -> String {
    format!(
        "Act as an expert real estate Automated Valuation Model (AVM). \
Use Google Search to find recent comparable sales, market trends, and public data for the property at: {address}. \
Provide a concise estimated market value. \
IMPORTANT: Respond *only* with the numerical dollar value, without any text, commas, or symbols (e.g., 525000). \
If you cannot determine a value, respond with '0'."
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insight_prompt_carries_formatted_figures() {
        let prompt = market_insight(750000.0, 4088.48);

        assert!(prompt.contains("Their desired new home price is $750,000."));
        assert!(prompt.contains("would be $4,088."));
    }

    #[test]
    fn image_prompt_carries_price() {
        assert!(house_image(425500.0).contains("sell for around $425,500."));
    }

    #[test]
    fn value_prompt_embeds_single_line_address() {
        let address = PropertyAddress {
            street: "915 Washington St".to_string(),
            city: "Manitowoc".to_string(),
            zip: "54220".to_string(),
            ..Default::default()
        };

        assert!(
            home_value(&address)
                .contains("for the property at: 915 Washington St, Manitowoc, WI 54220.")
        );
    }
}
