use yew::prelude::*;

const STAR_PATH: &str = "M10 15.27L16.18 18l-1.64-7.03L20 7.24l-7.19-.61L10 0 7.19 6.63 0 7.24l5.46 3.73L3.82 18z";

#[derive(Properties, PartialEq, Clone)]
pub struct StarRatingProps {
    /// Fill flag per slot, left to right.
    pub stars: Vec<bool>,
    pub review_label: AttrValue,
    #[prop_or(18)]
    pub size: u32,
    /// Appended after the count, e.g. `"reviews"`.
    #[prop_or_default]
    pub suffix: Option<AttrValue>,
}

#[function_component(StarRating)]
pub fn star_rating(p: &StarRatingProps) -> Html {
    let filled = p.stars.iter().filter(|f| **f).count();
    let aria = format!("{filled} out of {} stars", p.stars.len());
    let size = p.size.to_string();
    let label = p.suffix.as_ref().map_or_else(
        || p.review_label.to_string(),
        |suffix| format!("{} {suffix}", p.review_label),
    );

    html! {
        <div class="shelf-rating d-flex align-items-center" role="img" aria-label={aria}>
            { for p.stars.iter().enumerate().map(|(i, filled)| {
                let fill = if *filled { "#222" } else { "#e5e7eb" };
                html! {
                    <svg key={i} class="shelf-rating__star" width={size.clone()} height={size.clone()}
                         viewBox="0 0 20 20" fill={fill} data-filled={filled.to_string()}
                         xmlns="http://www.w3.org/2000/svg" aria-hidden="true">
                        <path d={STAR_PATH} />
                    </svg>
                }
            }) }
            <span class="shelf-rating__count ms-1">{ label }</span>
        </div>
    }
}
