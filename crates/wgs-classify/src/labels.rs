use wgs_core::ChartType;

use crate::category::GrowthCategory;

/// Short chart-specific label for a category.
pub fn label(chart: ChartType, category: GrowthCategory) -> &'static str {
    use GrowthCategory::*;
    match (chart, category) {
        (ChartType::WeightForAge, SevereDeficit) => "Severely underweight",
        (ChartType::WeightForAge, ModerateDeficit) => "Underweight",
        (ChartType::WeightForAge, Normal) => "Normal weight",
        (ChartType::WeightForAge, Elevated) => "High weight for age",
        (ChartType::WeightForAge, HighElevated) => "Very high weight for age",

        (ChartType::LengthHeightForAge, SevereDeficit) => "Severely stunted",
        (ChartType::LengthHeightForAge, ModerateDeficit) => "Stunted",
        (ChartType::LengthHeightForAge, Normal) => "Normal length/height",
        (ChartType::LengthHeightForAge, Elevated) => "Tall",
        (ChartType::LengthHeightForAge, HighElevated) => "Very tall",

        (ChartType::WeightForHeight, SevereDeficit) => "Severely wasted",
        (ChartType::WeightForHeight, ModerateDeficit) => "Wasted",
        (ChartType::WeightForHeight, Normal) => "Normal weight for height",
        (ChartType::WeightForHeight, Elevated) => "Overweight",
        (ChartType::WeightForHeight, HighElevated) => "Obese",

        (ChartType::HeadCircumferenceForAge, SevereDeficit) => "Severe microcephaly",
        (ChartType::HeadCircumferenceForAge, ModerateDeficit) => "Microcephaly",
        (ChartType::HeadCircumferenceForAge, Normal) => "Normal head circumference",
        (ChartType::HeadCircumferenceForAge, Elevated) => "Macrocephaly",
        (ChartType::HeadCircumferenceForAge, HighElevated) => "Severe macrocephaly",

        (ChartType::BmiForAge, SevereDeficit) => "Severely wasted",
        (ChartType::BmiForAge, ModerateDeficit) => "Wasted",
        (ChartType::BmiForAge, Normal) => "Normal BMI",
        (ChartType::BmiForAge, Elevated) => "Overweight",
        (ChartType::BmiForAge, HighElevated) => "Obese",
    }
}

/// Longer human readable explanation of a category for a chart.
pub fn description(chart: ChartType, category: GrowthCategory) -> &'static str {
    use GrowthCategory::*;
    match (chart, category) {
        (ChartType::WeightForAge, SevereDeficit) => {
            "Weight is more than 3 SD below the median for age. Refer for clinical assessment of severe undernutrition."
        }
        (ChartType::WeightForAge, ModerateDeficit) => {
            "Weight is between 2 and 3 SD below the median for age. Review feeding and recent illness."
        }
        (ChartType::WeightForAge, Normal) => "Weight is within 2 SD of the median for age.",
        (ChartType::WeightForAge, Elevated | HighElevated) => {
            "Weight is above 2 SD for age. The child may have a growth problem; assess with weight-for-length/height or BMI-for-age."
        }

        (ChartType::LengthHeightForAge, SevereDeficit) => {
            "Length/height is more than 3 SD below the median for age, indicating severe chronic undernutrition."
        }
        (ChartType::LengthHeightForAge, ModerateDeficit) => {
            "Length/height is between 2 and 3 SD below the median for age, indicating stunting."
        }
        (ChartType::LengthHeightForAge, Normal) => {
            "Length/height is within 2 SD of the median for age."
        }
        (ChartType::LengthHeightForAge, Elevated) => {
            "Length/height is above 2 SD for age. Tallness is rarely a problem unless parents are of normal height."
        }
        (ChartType::LengthHeightForAge, HighElevated) => {
            "Length/height is above 3 SD for age. Refer if an endocrine disorder is suspected."
        }

        (ChartType::WeightForHeight, SevereDeficit) => {
            "Weight is more than 3 SD below the median for length/height, indicating severe acute malnutrition."
        }
        (ChartType::WeightForHeight, ModerateDeficit) => {
            "Weight is between 2 and 3 SD below the median for length/height, indicating wasting."
        }
        (ChartType::WeightForHeight, Normal) => {
            "Weight is within 2 SD of the median for length/height."
        }
        (ChartType::WeightForHeight, Elevated) => {
            "Weight is between 2 and 3 SD above the median for length/height, indicating overweight."
        }
        (ChartType::WeightForHeight, HighElevated) => {
            "Weight is more than 3 SD above the median for length/height, indicating obesity."
        }

        (ChartType::HeadCircumferenceForAge, SevereDeficit) => {
            "Head circumference is more than 3 SD below the median for age. Refer for neurological evaluation."
        }
        (ChartType::HeadCircumferenceForAge, ModerateDeficit) => {
            "Head circumference is between 2 and 3 SD below the median for age."
        }
        (ChartType::HeadCircumferenceForAge, Normal) => {
            "Head circumference is within 2 SD of the median for age."
        }
        (ChartType::HeadCircumferenceForAge, Elevated) => {
            "Head circumference is between 2 and 3 SD above the median for age."
        }
        (ChartType::HeadCircumferenceForAge, HighElevated) => {
            "Head circumference is more than 3 SD above the median for age. Refer for evaluation of hydrocephalus or other causes."
        }

        (ChartType::BmiForAge, SevereDeficit) => {
            "BMI is more than 3 SD below the median for age, indicating severe thinness."
        }
        (ChartType::BmiForAge, ModerateDeficit) => {
            "BMI is between 2 and 3 SD below the median for age, indicating thinness."
        }
        (ChartType::BmiForAge, Normal) => "BMI is within 2 SD of the median for age.",
        (ChartType::BmiForAge, Elevated) => {
            "BMI is between 2 and 3 SD above the median for age, indicating overweight."
        }
        (ChartType::BmiForAge, HighElevated) => {
            "BMI is more than 3 SD above the median for age, indicating obesity."
        }
    }
}
