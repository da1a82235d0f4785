use crate::game_engine::{helpers::card, models::ScenarioCard};

pub fn cards() -> Vec<ScenarioCard> {
    vec![
        card(1, "Shower for 5 minutes", "Shower for 1 hour!", true,
            "timer", "clock.badge.exclamationmark"),
        card(2, "Use both sides of the paper", "Draw only one line and throw away!", true,
            "square.fill.on.square", "trash.fill"),
        card(3, "Keep lights on, I love light!", "Turn off the light when not using.", false,
            "lightbulb.fill", "lightbulb.slash.fill"),
        card(4, "Throw away food if don't like", "Eat some of it and share with others", false,
            "trash.fill", "fork.knife.circle.fill"),
        card(5, "Bring your own bag", "Use plastic bags that harm the planet", true,
            "bag.fill", "xmark.bin.fill"),
        card(6, "Turn off water while brushing teeth", "Let water run the whole time", true,
            "drop.halffull", "drop.triangle"),
        card(7, "Fix dripping tap right away", "Let tap drip all day long", true,
            "wrench.fill", "drop.triangle"),
        card(8, "Take small portions and ask for more", "Take huge portions and throw away", true,
            "fork.knife.circle.fill", "trash.fill"),
        card(9, "Save food you don't eat for later", "Throw away food you don't finish", true,
            "refrigerator.fill", "trash.fill"),
        card(10, "Take many snacks and waste them", "Share your snack with a friend", false,
            "takeoutbag.and.cup.and.straw.fill", "person.2.fill"),
        card(11, "Open curtains to use sunlight", "Turn on all lights in daytime", true,
            "light.max", "lightbulb.fill"),
        card(12, "Close fridge door quickly", "Stand with fridge door open", true,
            "refrigerator.fill", "door.garage.open"),
        card(13, "Break toys and throw away", "Play with toys carefully", false,
            "hammer.fill", "teddybear.fill"),
        card(14, "Share toys with friends", "Ask for brand new toys every day", true,
            "teddybear.fill", "cart.fill"),
        card(15, "Fix broken crayons with tape", "Throw away broken crayons", true,
            "pencil.tip", "trash.fill"),
        card(16, "Throw paper on the ground", "Put paper in recycling bin", false,
            "xmark.bin.fill", "arrow.3.trianglepath"),
        card(17, "Use a refillable water bottle", "Use new plastic bottles each time", true,
            "waterbottle.fill", "waterbottle"),
        card(18, "Change clothes many times a day", "Wear clothes until they're dirty", false,
            "tshirt.fill", "tshirt"),
        card(19, "Pass clothes to younger kids", "Throw away outgrown clothes", true,
            "tshirt.fill", "trash.fill"),
        card(20, "Leave trash on the ground", "Pick up trash at the park", false,
            "xmark.bin.fill", "arrow.3.trianglepath"),
        card(21, "Water plants with leftover water", "Pour leftover water down the drain", true,
            "drop.fill", "shower.fill"),
        card(22, "Use crayons until they're tiny", "Throw away big crayons", true,
            "pencil.tip", "trash.fill"),
        card(23, "Grab handfuls of tissues", "Use a tissue only when needed", false,
            "hand.point.up.braille.fill", "1.square.fill"),
    ]
}
